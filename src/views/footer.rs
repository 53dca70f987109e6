use chrono::{ Datelike, Local };
use dioxus::prelude::*;
use crate::content::{ copyright_line, NAV_ITEMS, FOOTER_LINKS };
use crate::utils::section_anchor;

#[component]
pub fn Footer() -> Element {
    let year = use_hook(|| Local::now().year());
    let links = FOOTER_LINKS
        .iter()
        .filter_map(|id| NAV_ITEMS.iter().find(|item| item.id == *id));

    rsx! {
        footer {
            class: "py-10 bg-navy text-white",
            div {
                class: "mx-auto max-w-7xl px-6 flex flex-col sm:flex-row items-center justify-between gap-4",
                p { class: "text-white/70", {copyright_line(year)} }
                div {
                    class: "flex items-center gap-4",
                    for item in links {
                        a {
                            key: "{item.id}",
                            href: section_anchor(item.id),
                            class: "hover:text-blue-300",
                            "{item.label}"
                        }
                    }
                }
            }
        }
    }
}
