use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkError {
    #[error(
        "All fiber parameters must be of the same length \
         (length={length}, attenuation={attenuation}, gamma={gamma}, gain={gain})"
    )]
    ParameterLengthMismatch {
        length: usize,
        attenuation: usize,
        gamma: usize,
        gain: usize,
    },

    #[error("Fiber parameters must hold at least one segment")]
    EmptyPattern,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type LinkResult<T> = Result<T, LinkError>;
