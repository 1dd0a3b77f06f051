//! Process-level error type.
//!
//! All fallible paths bubble up an `AppError` carrying the message shown on
//! stderr and the process exit code. Conventions:
//!
//! - 2: file I/O (exports)
//! - 3: invalid user input (malformed fraction, out-of-range percentage)
//! - 4: terminal/UI failures

#[derive(Clone)]
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

    /// Invalid user input (exit code 3).
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// File I/O failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
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
