use crate::config::ConfigError;

/// Anything that stops the frontend from starting or saving output.
#[derive(Debug)]
pub enum FrontendError {
    /// SDL reports its failures as strings.
    Sdl(String),
    Config(ConfigError),
    Io(std::io::Error),
    Png(png::EncodingError),
}

impl std::fmt::Display for FrontendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sdl(e) => write!(f, "SDL error: {e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Png(e) => write!(f, "PNG encoding failed: {e}"),
        }
    }
}

impl std::error::Error for FrontendError {}

impl From<String> for FrontendError {
    fn from(e: String) -> Self {
        Self::Sdl(e)
    }
}

impl From<ConfigError> for FrontendError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for FrontendError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<png::EncodingError> for FrontendError {
    fn from(e: png::EncodingError) -> Self {
        Self::Png(e)
    }
}

/// Wrap any displayable SDL error type (window, canvas, texture builders).
pub fn sdl_err(e: impl std::fmt::Display) -> FrontendError {
    FrontendError::Sdl(e.to_string())
}
