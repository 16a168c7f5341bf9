use crate::{
    args,
    calc,
    io,
};

/// Error-type enum for the `trivec` crate.
/// Wraps the errors of each module, the vector math itself never errors.
#[derive(Debug)]
pub enum TrivecError {
    ArgError(args::ArgError),
    CalcError(calc::CalcError),
    IoError(io::IoError),
    StringOnly(String),
}
impl std::fmt::Display for TrivecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrivecError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            TrivecError::CalcError(error) => write!(f, "! CALC ERROR:\n{}", error),
            TrivecError::IoError(error) => write!(f, "! IO ERROR:\n{}", error),
            TrivecError::StringOnly(error) => write!(f, "! TRIVEC ERROR:\n- {}", error),
        }
    }
}
impl From<String> for TrivecError {
    fn from(error: String) -> Self {
        TrivecError::StringOnly(error)
    }
}
impl From<args::ArgError> for TrivecError {
    fn from(error: args::ArgError) -> Self {
        TrivecError::ArgError(error)
    }
}
impl From<calc::CalcError> for TrivecError {
    fn from(error: calc::CalcError) -> Self {
        TrivecError::CalcError(error)
    }
}
impl From<io::IoError> for TrivecError {
    fn from(error: io::IoError) -> Self {
        TrivecError::IoError(error)
    }
}

/// Result type for the `trivec` crate.
pub type TrivecResult<T> = std::result::Result<T, TrivecError>;

/// Create a `TrivecResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::TrivecError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> TrivecResult<T> {
    Err(TrivecError::StringOnly(error_str.to_string()))
}
