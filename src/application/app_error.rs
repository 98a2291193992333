use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("A submission for this form is already in progress")]
    SubmissionInProgress,
}

#[derive(Clone, Copy, Debug)]
pub enum ErrorCode {
    InvalidInput,
    SubmissionInProgress,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInput => "INVALID_INPUT",
            ErrorCode::SubmissionInProgress => "SUBMISSION_IN_PROGRESS",
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
