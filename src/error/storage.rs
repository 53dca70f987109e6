use std::fmt::{ Display, Formatter };
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable(String),
    Read(String),
    Write(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage Unavailable: {}", msg),
            StorageError::Read(msg) => write!(f, "Storage Read Error: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage Write Error: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

// Browser storage calls reject with an opaque JsValue (SecurityError, QuotaExceededError).
impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Unavailable(format!("{:?}", value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_failed_operation() {
        let err = StorageError::Write("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage Write Error: quota exceeded");

        let err = StorageError::Read("blocked".to_string());
        assert_eq!(err.to_string(), "Storage Read Error: blocked");
    }
}
