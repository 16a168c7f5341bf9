/// Calc process error type.
#[derive(Debug)]
pub enum CalcError {
    /// Job or results file could not be read or written.
    IoError(crate::io::IoError),
    /// Job file lists no operations.
    EmptyJob,
    /// Output path missing while saving is forced, or not a .json file.
    OutputPath(String),
    /// Operation name not in `Operation`.
    UnknownOperation{name: String, available: Vec<&'static str>},
    /// Command line operands do not fit the operation.
    Operands{op: &'static str, reason: String},
}
impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            CalcError::EmptyJob => write!(f, "- Calc job has no operations"),
            CalcError::OutputPath(reason) => write!(f, "- Calc output path: {}", reason),
            CalcError::UnknownOperation{name, available} => write!(f, "- Operation \"{}\" not found. Available operations:\n{}", name, available.join("\n")),
            CalcError::Operands{op, reason} => write!(f, "- Operation \"{}\" {}", op, reason),
        }
    }
}
impl From<crate::io::IoError> for CalcError {
    fn from(error: crate::io::IoError) -> Self {
        CalcError::IoError(error)
    }
}

/// Result type for the `calc` module.
pub type ProcResult<T> = std::result::Result<T, CalcError>;

/// Create a `CalcError::Operands` for an operation.
pub fn operand_err<T>(op: &'static str, reason: String) -> ProcResult<T> {
    Err(CalcError::Operands{op, reason})
}
