//! Single error type for the library and the `cpg` binary.
//!
//! Every error carries the process exit code it maps to:
//!
//! - `2`: invalid input, configuration, or file I/O
//! - `4`: numerical failure (non-finite values, failed normalization, rendering)

/// Exit code for invalid input/configuration and I/O failures.
pub const EXIT_INPUT: u8 = 2;

/// Exit code for numerical and rendering failures.
pub const EXIT_NUMERIC: u8 = 4;

#[derive(Clone, PartialEq, Eq)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// Shorthand for an [`EXIT_INPUT`] error.
    pub fn input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INPUT, message)
    }

    /// Shorthand for an [`EXIT_NUMERIC`] error.
    pub fn numeric(message: impl Into<String>) -> Self {
        Self::new(EXIT_NUMERIC, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_constructors_set_exit_codes() {
        assert_eq!(AppError::input("bad").exit_code(), EXIT_INPUT);
        assert_eq!(AppError::numeric("nan").exit_code(), EXIT_NUMERIC);
        assert_eq!(AppError::input("bad flag").to_string(), "bad flag");
    }
}
