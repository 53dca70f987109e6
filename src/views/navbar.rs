use std::rc::Rc;
use dioxus::prelude::*;
use crate::components::{ MenuIcon, MoonIcon, SunIcon };
use crate::content::{ NAV_ITEMS, OWNER };
use crate::utils::{ scroll_to_section, ThemePreference, ThemeState };

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<ThemeState>>();
    let preference = use_context::<Rc<ThemePreference>>();

    rsx! {
        button {
            r#type: "button",
            class: "text-white hover:text-yellow-300 transition",
            aria_label: "Toggle dark mode",
            title: theme.read().toggle_label(),
            onclick: move |_| {
                theme.write().toggle(&preference);
            },
            if theme.read().is_dark() {
                SunIcon { size: 18 }
            } else {
                MoonIcon { size: 18 }
            }
        }
    }
}

#[component]
pub fn Navbar() -> Element {
    let mut menu_open = use_signal(|| false);

    let mut go_to = move |id: &'static str| {
        scroll_to_section(id);
        menu_open.set(false);
    };

    rsx! {
        header {
            class: "fixed inset-x-0 top-0 z-50 backdrop-blur border-b border-white/10 bg-navy/60 dark:bg-navy-900/60",
            div {
                class: "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8",
                div {
                    class: "flex h-16 items-center justify-between",
                    div {
                        class: "flex items-center gap-3",
                        div { class: "h-8 w-8 rounded bg-gradient-to-br from-blue-400 to-purple-500" }
                        span { class: "font-semibold text-white", "{OWNER.name}" }
                    }

                    nav {
                        class: "hidden md:flex items-center gap-8",
                        for item in NAV_ITEMS.iter() {
                            button {
                                key: "{item.id}",
                                r#type: "button",
                                class: "text-white/80 hover:text-white transition",
                                onclick: move |_| go_to(item.id),
                                "{item.label}"
                            }
                        }
                        ThemeToggle {}
                    }

                    div {
                        class: "md:hidden flex items-center gap-3",
                        ThemeToggle {}
                        button {
                            r#type: "button",
                            class: "text-white",
                            aria_label: "Toggle navigation menu",
                            aria_expanded: "{menu_open}",
                            onclick: move |_| menu_open.toggle(),
                            MenuIcon {}
                        }
                    }
                }

                if menu_open() {
                    div {
                        class: "md:hidden pb-4",
                        div {
                            class: "grid gap-2",
                            for item in NAV_ITEMS.iter() {
                                button {
                                    key: "{item.id}",
                                    r#type: "button",
                                    class: "text-left px-2 py-2 rounded hover:bg-white/10 text-white/90",
                                    onclick: move |_| go_to(item.id),
                                    "{item.label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
