use std::fmt::{ Display, Formatter };

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeError {
    Unrecognized(String),
}

impl Display for ThemeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeError::Unrecognized(value) =>
                write!(f, "Unrecognized color scheme '{}', expected 'dark' or 'light'", value),
        }
    }
}

impl std::error::Error for ThemeError {}
