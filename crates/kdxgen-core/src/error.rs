use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error(
        "{} is not a Kindle device root (expected audible/, documents/, music/ and system/)",
        .0.display()
    )]
    NotADeviceRoot(PathBuf),
}
