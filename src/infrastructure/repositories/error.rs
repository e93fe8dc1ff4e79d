use crate::domain::errors::DomainError;
use std::path::Path;

pub fn map_io(path: &Path, err: std::io::Error) -> DomainError {
    match err.kind() {
        std::io::ErrorKind::NotFound => {
            DomainError::NotFound(format!("fixture file {} not found", path.display()))
        }
        _ => DomainError::Persistence(format!("reading {}: {err}", path.display())),
    }
}

pub fn map_json(err: serde_json::Error) -> DomainError {
    DomainError::Persistence(format!(
        "malformed fixture at line {} column {}: {err}",
        err.line(),
        err.column()
    ))
}
