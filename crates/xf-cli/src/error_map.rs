use thiserror::Error;
use xf_core::XFormError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Form(#[from] XFormError),
    #[error("Failed to scan result directory {path}: {message}")]
    ResultScan { path: String, message: String },
    #[error("No .xml result files under {path}.")]
    ResultEmpty { path: String },
    #[error("Failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Form(error) => error.code(),
            Self::ResultScan { .. } => "CLI_RESULT_SCAN",
            Self::ResultEmpty { .. } => "CLI_RESULT_EMPTY",
            Self::Output(_) => "CLI_OUTPUT",
        }
    }
}

pub(crate) fn emit_error(error: CliError) -> i32 {
    println!("RESULT:ERROR");
    println!("ERROR_CODE:{}", error.code());
    println!(
        "ERROR_MSG_JSON:{}",
        serde_json::to_string(&error.to_string()).expect("string json")
    );
    1
}
