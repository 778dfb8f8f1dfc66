use crate::core::Storage;
use crate::utils::error::{MultiplesError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => MultiplesError::NotFoundError {
                path: path.to_string(),
            },
            ErrorKind::PermissionDenied => MultiplesError::PermissionError {
                path: path.to_string(),
            },
            _ => MultiplesError::IoError(e),
        })
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        if let Some(parent) = Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(path, data).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => MultiplesError::PermissionError {
                path: path.to_string(),
            },
            _ => MultiplesError::IoError(e),
        })
    }
}
