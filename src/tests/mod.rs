mod common;
mod theme_preference;
