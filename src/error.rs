use thiserror::Error;

pub type RemoteResult<T> = Result<T, RemoteError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RemoteError {
    #[error("Invalid type for option '{key}': expected {expected}")]
    InvalidOptionType { key: String, expected: String },

    #[error("Invalid value for option '{key}': {reason}")]
    InvalidOptionValue { key: String, reason: String },

    #[error("Control option '{key}' was already consumed from this options bag")]
    ControlOptionConsumed { key: String },

    #[error("Remote indicator configuration has already been set for this process")]
    ConfigAlreadySet,

    #[error("Invalid configuration field '{field}': {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Unknown environment '{value}'. Expected one of: development, test, production")]
    UnknownEnvironment { value: String },

    #[error("Unknown action kind '{value}'. Expected one of: remote_function, form_remote_tag, submit_to_remote")]
    UnknownActionKind { value: String },

    #[error("Missing required field '{field}' for '{kind}'")]
    MissingField { kind: String, field: String },

    #[error("Render error: {0}")]
    RenderError(String),

    #[error("YAML error: {0}")]
    YamlError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<serde_yaml::Error> for RemoteError {
    fn from(err: serde_yaml::Error) -> Self {
        RemoteError::YamlError(err.to_string())
    }
}

impl From<std::io::Error> for RemoteError {
    fn from(err: std::io::Error) -> Self {
        RemoteError::IoError(err.to_string())
    }
}
