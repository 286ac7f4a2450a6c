use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum XFormError {
    /// The definition or result document could not be opened or parsed.
    #[error("Source \"{source_name}\" is unreadable: {reason}")]
    SourceUnreadable { source_name: String, reason: String },
}

impl XFormError {
    pub fn source_unreadable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnreadable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::SourceUnreadable { .. } => "SOURCE_UNREADABLE",
        }
    }
}
