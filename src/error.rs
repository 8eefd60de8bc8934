use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizMemeError {
    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<&str> for QuizMemeError {
    fn from(error: &str) -> Self {
        QuizMemeError::StorageError(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuizMemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_converts_to_storage_error() {
        let error = QuizMemeError::from("memory backend poisoned");
        assert!(matches!(error, QuizMemeError::StorageError(ref msg) if msg == "memory backend poisoned"));
        assert_eq!(error.to_string(), "Storage error: memory backend poisoned");
    }
}
