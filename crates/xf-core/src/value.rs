use serde::{Deserialize, Serialize};

/// Answer payload of a normalized record. Multi-select questions produce
/// `Multiple`, possibly empty when no submitted token matched an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer<T> {
    Single(T),
    Multiple(Vec<T>),
}

impl<T> Answer<T> {
    pub fn as_single(&self) -> Option<&T> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(_) => None,
        }
    }

    pub fn as_multiple(&self) -> Option<&[T]> {
        match self {
            Self::Single(_) => None,
            Self::Multiple(values) => Some(values.as_slice()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub label: Option<String>,
    pub machine_label: String,
    /// Human-readable answer. `None` when the question was left unanswered.
    pub value: Option<Answer<Option<String>>>,
    pub machine_value: Option<Answer<String>>,
}

impl AnswerRecord {
    pub fn unanswered(label: Option<String>, machine_label: impl Into<String>) -> Self {
        Self {
            label,
            machine_label: machine_label.into(),
            value: None,
            machine_value: None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.machine_value.is_some()
    }
}
