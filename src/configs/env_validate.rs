use crate::utils::ThemeFlag;

/// localStorage key holding the visitor's explicit theme choice.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Native builds have no media query to ask, so the ambient scheme comes from here.
pub const COLOR_SCHEME_VAR: &str = "PORTFOLIO_COLOR_SCHEME";

pub fn color_scheme_override() -> Option<ThemeFlag> {
    parse_color_scheme(std::env::var(COLOR_SCHEME_VAR).ok())
}

fn parse_color_scheme(value: Option<String>) -> Option<ThemeFlag> {
    let value = value?;
    if value.trim().is_empty() {
        return None;
    }
    match value.parse::<ThemeFlag>() {
        Ok(flag) => {
            log::info!("Using {} from {}", flag, COLOR_SCHEME_VAR);
            Some(flag)
        }
        Err(e) => {
            log::warn!("{} ignored: {}", COLOR_SCHEME_VAR, e);
            None
        }
    }
}

pub fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenv::dotenv().ok();
        if std::env::var("RUST_LOG").is_err() {
            std::env::set_var("RUST_LOG", "info");
        }
        // A second init (tests, hot reload) keeps the first logger.
        let _ = env_logger::try_init();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"console logger already initialised".into());
        }
    }
}
