use thiserror::Error;

pub type Result<T> = std::result::Result<T, HowmError>;

#[derive(Debug, Error)]
pub enum HowmError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("XDG error: {0}")]
    XdgBaseDirError(#[from] xdg::BaseDirectoriesError),
    #[error("Config parsing error: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Could not connect to the X server")]
    XConnection,
}
