pub mod views;
pub mod components;
pub mod content;
pub mod utils;
mod routes;
pub mod configs;
mod error;
#[cfg(test)]
mod tests;

pub use crate::routes::*;
pub use crate::utils::*;
pub use crate::configs::init_logging;
pub use crate::error::{ StorageError, ThemeError };
