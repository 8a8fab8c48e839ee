// src/utils/error.rs
use std::path::PathBuf;
use thiserror::Error;

// Define specific error types for different parts of the application.
// The extraction core has none: it always produces a profile.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Could not read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input is not valid UTF-8 text: {0}")]
    NotUtf8(PathBuf),

    #[error("Input looks like binary data, extract its text first: {0}")]
    BinaryContent(PathBuf),
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Input failed: {0}")]
    Input(#[from] InputError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
