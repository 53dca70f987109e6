/// `#id` href for plain in-page anchors.
pub fn section_anchor(id: &str) -> String {
    format!("#{}", id)
}

/// Smoothly scrolls the section with the given id to the top of the viewport.
/// Does nothing if no such element is on the page.
pub fn scroll_to_section(id: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        use web_sys::{ ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition };

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id)) else {
            log::debug!("No section with id '{}' to scroll to", id);
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = dioxus::prelude::document::eval(&scroll_script(id));
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_script(id: &str) -> String {
    format!(
        "document.getElementById({:?})?.scrollIntoView({{ behavior: 'smooth', block: 'start' }});",
        id
    )
}
