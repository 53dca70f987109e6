use crate::utils::theme_state::ThemeFlag;

const DARK_CLASS: &str = "dark";

/// Mirrors the theme onto `<html>` so `dark:` variants reach content
/// rendered outside the app root (scrollbars, the body background).
pub fn apply_theme_class(flag: ThemeFlag) {
    #[cfg(target_arch = "wasm32")]
    {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, flag.is_dark()) {
                log::warn!("Failed to toggle document theme class: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::trace!("{} class is carried by the app root only: {}", DARK_CLASS, flag);
    }
}
