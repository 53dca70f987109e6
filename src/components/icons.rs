//! Stroke icons (lucide outlines) drawn inline so the page needs no icon font.

use dioxus::prelude::*;
use crate::content::SocialKind;

#[component]
fn Icon(#[props(default = 24)] size: u32, children: Element) -> Element {
    rsx! {
        svg {
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            "aria-hidden": "true",
            {children}
        }
    }
}

#[component]
pub fn MenuIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        Icon { size,
            line { x1: "4", x2: "20", y1: "12", y2: "12" }
            line { x1: "4", x2: "20", y1: "6", y2: "6" }
            line { x1: "4", x2: "20", y1: "18", y2: "18" }
        }
    }
}

#[component]
pub fn MoonIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" }
        }
    }
}

#[component]
pub fn SunIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        Icon { size,
            circle { cx: "12", cy: "12", r: "4" }
            path { d: "M12 2v2" }
            path { d: "M12 20v2" }
            path { d: "m4.93 4.93 1.41 1.41" }
            path { d: "m17.66 17.66 1.41 1.41" }
            path { d: "M2 12h2" }
            path { d: "M20 12h2" }
            path { d: "m6.34 17.66-1.41 1.41" }
            path { d: "m19.07 4.93-1.41 1.41" }
        }
    }
}

#[component]
pub fn GithubIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4" }
            path { d: "M9 18c-4.51 2-5-2-7-2" }
        }
    }
}

#[component]
pub fn MailIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        Icon { size,
            rect { width: "20", height: "16", x: "2", y: "4", rx: "2" }
            path { d: "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7" }
        }
    }
}

#[component]
pub fn LinkedinIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z" }
            rect { width: "4", height: "12", x: "2", y: "9" }
            circle { cx: "4", cy: "4", r: "2" }
        }
    }
}

#[component]
pub fn GlobeIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        Icon { size,
            circle { cx: "12", cy: "12", r: "10" }
            path { d: "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20" }
            path { d: "M2 12h20" }
        }
    }
}

#[component]
pub fn ChevronRightIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "m9 18 6-6-6-6" }
        }
    }
}

#[component]
pub fn ExternalLinkIcon(#[props(default = 24)] size: u32) -> Element {
    rsx! {
        Icon { size,
            path { d: "M15 3h6v6" }
            path { d: "M10 14 21 3" }
            path { d: "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6" }
        }
    }
}

#[component]
pub fn SocialIcon(kind: SocialKind, #[props(default = 24)] size: u32) -> Element {
    match kind {
        SocialKind::Github => rsx! { GithubIcon { size } },
        SocialKind::Mail => rsx! { MailIcon { size } },
        SocialKind::Linkedin => rsx! { LinkedinIcon { size } },
        SocialKind::Website => rsx! { GlobeIcon { size } },
    }
}
