pub mod env_validate;

pub use env_validate::{ color_scheme_override, init_logging, THEME_STORAGE_KEY };
