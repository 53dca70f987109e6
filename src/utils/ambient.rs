//! Where the visitor's OS-level color-scheme preference comes from.

/// Zero-argument query answering "does the host prefer a dark scheme?".
pub type AmbientScheme = Box<dyn Fn() -> bool>;

#[cfg(target_arch = "wasm32")]
const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `matchMedia("(prefers-color-scheme: dark)").matches`, false if the query can't run.
#[cfg(target_arch = "wasm32")]
pub fn prefers_dark_media_query() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map_or(false, |mq| mq.matches())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn prefers_dark_env() -> bool {
    crate::configs::color_scheme_override().map_or(false, |flag| flag.is_dark())
}

pub fn platform_ambient() -> AmbientScheme {
    #[cfg(target_arch = "wasm32")]
    {
        Box::new(prefers_dark_media_query)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(prefers_dark_env)
    }
}
