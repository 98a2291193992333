use thiserror::Error;

/// Code the store reports when an insert hits the unique constraint on `email`
/// (Postgres `unique_violation`).
pub const UNIQUE_VIOLATION_CODE: &str = "23505";

/// Why a waitlist submission did not result in a new entry.
///
/// Display output is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitlistError {
    #[error("Please enter your email address.")]
    MissingEmail,

    #[error("Database configuration missing on server.")]
    ConfigurationMissing,

    /// Store rejected the insert for a reason other than a duplicate. Carries the
    /// store's message verbatim.
    #[error("{0}")]
    Store(String),

    #[error("An unexpected error occurred. Please try again.")]
    Unexpected,
}

/// Classified result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WaitlistOutcome {
    Joined,
    AlreadyRegistered,
    Failed(WaitlistError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutcomeCode {
    Joined,
    AlreadyRegistered,
    MissingEmail,
    ConfigurationMissing,
    StoreError,
    UnexpectedError,
}

impl OutcomeCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeCode::Joined => "JOINED",
            OutcomeCode::AlreadyRegistered => "ALREADY_REGISTERED",
            OutcomeCode::MissingEmail => "MISSING_EMAIL",
            OutcomeCode::ConfigurationMissing => "CONFIGURATION_MISSING",
            OutcomeCode::StoreError => "STORE_ERROR",
            OutcomeCode::UnexpectedError => "UNEXPECTED_ERROR",
        }
    }
}

impl WaitlistOutcome {
    pub fn code(&self) -> OutcomeCode {
        match self {
            WaitlistOutcome::Joined => OutcomeCode::Joined,
            WaitlistOutcome::AlreadyRegistered => OutcomeCode::AlreadyRegistered,
            WaitlistOutcome::Failed(WaitlistError::MissingEmail) => OutcomeCode::MissingEmail,
            WaitlistOutcome::Failed(WaitlistError::ConfigurationMissing) => {
                OutcomeCode::ConfigurationMissing
            }
            WaitlistOutcome::Failed(WaitlistError::Store(_)) => OutcomeCode::StoreError,
            WaitlistOutcome::Failed(WaitlistError::Unexpected) => OutcomeCode::UnexpectedError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            WaitlistOutcome::Joined => "Successfully added to the Zendit waitlist!".to_string(),
            WaitlistOutcome::AlreadyRegistered => "You're already on the waitlist! 🚀".to_string(),
            WaitlistOutcome::Failed(err) => err.to_string(),
        }
    }

    /// Only a fresh entry clears the form; everything else leaves the typed
    /// email in place for a retry.
    pub fn clears_input(&self) -> bool {
        matches!(self, WaitlistOutcome::Joined)
    }
}
