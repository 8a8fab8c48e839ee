// src/input.rs
use std::path::{Path, PathBuf};

use tokio::io::AsyncReadExt;

use crate::utils::error::InputError;

/// Path argument that means "read from stdin".
pub const STDIN_MARKER: &str = "-";

/// Loads résumé text from a file, or from stdin when `path` is `-`.
///
/// The text must already be extracted from its document: non-UTF-8 bytes or
/// NUL bytes are rejected. Blank text is valid and parses to the default profile.
pub async fn load_text(path: &Path) -> Result<String, InputError> {
    let bytes = if path.as_os_str() == STDIN_MARKER {
        let mut buf = Vec::new();
        tokio::io::stdin().read_to_end(&mut buf).await?;
        buf
    } else {
        tokio::fs::read(path).await?
    };
    tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
    decode_text(bytes, path)
}

/// Validates raw bytes as plain résumé text.
pub fn decode_text(bytes: Vec<u8>, path: &Path) -> Result<String, InputError> {
    if bytes.contains(&0) {
        return Err(InputError::BinaryContent(path.to_path_buf()));
    }
    String::from_utf8(bytes).map_err(|_| InputError::NotUtf8(path.to_path_buf()))
}

/// File stem used to name outputs for an input path.
pub fn output_stem(path: &Path) -> String {
    if path.as_os_str() == STDIN_MARKER {
        return "stdin".to_string();
    }
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "resume".to_string())
}

/// Expands the CLI's path list; an empty list means stdin.
pub fn resolve_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    if inputs.is_empty() {
        vec![PathBuf::from(STDIN_MARKER)]
    } else {
        inputs.to_vec()
    }
}
