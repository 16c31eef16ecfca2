use std::fmt;

/// User-facing failure of a single forecast request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// No date was entered.
    EmptyInput,
    /// The input is not a `YYYY-MM-DD` calendar date.
    Parse { input: String },
}

impl ForecastError {
    /// Message shown to the user by the HTTP and CLI shells.
    pub fn user_message(&self) -> String {
        match self {
            ForecastError::EmptyInput => self.to_string(),
            ForecastError::Parse { .. } => format!("An error occurred: {self}"),
        }
    }
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForecastError::EmptyInput => write!(f, "Please enter a valid date."),
            ForecastError::Parse { input } => {
                write!(f, "invalid forecast date {input:?}: expected YYYY-MM-DD")
            }
        }
    }
}

impl std::error::Error for ForecastError {}
