use std::io::Write;
use std::path::Path;

/// Supported config file extensions.
pub const CFG_FILETYPES: [&str; 4] = ["json", "toml", "yaml", "yml"];

#[derive(Debug)]
pub enum IoErrorType {
    File(std::io::Error),
    SerdeJson(serde_json::Error),
    SerdeYaml(serde_yaml::Error),
    TomlDe(toml::de::Error),
    UnsupportedFiletype(String),
}
impl std::fmt::Display for IoErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IoErrorType::File(error) => write!(f, "- File IO Error:\n{}", error),
            IoErrorType::SerdeJson(error) => write!(f, "- JSON Serialization/Deserialization Error:\n{}", error),
            IoErrorType::SerdeYaml(error) => write!(f, "- YAML Deserialization Error:\n{}", error),
            IoErrorType::TomlDe(error) => write!(f, "- TOML Deserialization Error:\n{}", error),
            IoErrorType::UnsupportedFiletype(ext) => write!(f, "- Unsupported filetype \"{}\"\nSupported filetypes: {:?}", ext, CFG_FILETYPES),
        }
    }
}

/// Verbose IO error, carrying the file that caused it.
#[derive(Debug)]
pub struct IoError {
    /// Filepath facing an error.
    pub file: String,
    /// Error cause.
    pub cause: IoErrorType,
}
impl IoError {
    fn new(path: &str, cause: IoErrorType) -> Self {
        IoError{file: path.to_string(), cause}
    }
}
impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "- Error with file: {}\n{}", self.file, self.cause)
    }
}

pub type IoResult<T> = std::result::Result<T, IoError>;

/// Open a file with verbose errors.
pub fn open(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::open(path).map_err(|error| IoError::new(path, IoErrorType::File(error)))
}

/// Create a file with verbose errors.
pub fn create(path: &str) -> IoResult<std::fs::File> {
    std::fs::File::create(path).map_err(|error| IoError::new(path, IoErrorType::File(error)))
}

/// Read a whole file to a string with verbose errors.
pub fn read_to_string(path: &str) -> IoResult<String> {
    std::fs::read_to_string(path).map_err(|error| IoError::new(path, IoErrorType::File(error)))
}

/// Write string to file with verbose errors.
pub fn write_to_file(path: &str, buffer: &str) -> IoResult<()> {
    let mut f = create(path)?;
    f.write_all(buffer.as_bytes()).map_err(|error| IoError::new(path, IoErrorType::File(error)))
}

/// Write a value as pretty JSON.
pub fn write_json<T: serde::Serialize>(path: &str, value: &T) -> IoResult<()> {
    let buffer = serde_json::to_string_pretty(value)
        .map_err(|error| IoError::new(path, IoErrorType::SerdeJson(error)))?;
    write_to_file(path, &buffer)
}

/// Read a JSON file.
pub fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> IoResult<T> {
    serde_json::from_reader(open(path)?).map_err(|error| IoError::new(path, IoErrorType::SerdeJson(error)))
}

/// Read in cfg files from the supported filetypes.
pub fn read_cfg_file<T>(path: &str) -> IoResult<T>
where T: serde::de::DeserializeOwned
{
    let ext = Path::new(path).extension().and_then(|ext| ext.to_str()).unwrap_or("");
    match ext {
        "json" => read_json(path),
        "toml" => toml::from_str(&read_to_string(path)?)
            .map_err(|error| IoError::new(path, IoErrorType::TomlDe(error))),
        "yaml" | "yml" => serde_yaml::from_reader(open(path)?)
            .map_err(|error| IoError::new(path, IoErrorType::SerdeYaml(error))),
        _ => Err(IoError::new(path, IoErrorType::UnsupportedFiletype(ext.to_string()))),
    }
}
