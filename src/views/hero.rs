use dioxus::prelude::*;
use crate::components::{ ChevronRightIcon, SocialIcon };
use crate::content::{ HERO_SCENE_URL, OWNER, SOCIAL_LINKS, SPLINE_VIEWER_SCRIPT };
use crate::utils::section_anchor;

/// The 3D scene behind the hero, rendered by the `spline-viewer` web component.
#[component]
fn SceneEmbed(url: &'static str) -> Element {
    rsx! {
        document::Script { r#type: "module", src: SPLINE_VIEWER_SCRIPT }
        div {
            class: "absolute inset-0",
            spline-viewer {
                "url": url,
                "style": "width: 100%; height: 100%;",
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    rsx! {
        section {
            id: "home",
            class: "relative min-h-[90vh] flex items-center bg-navy text-white overflow-hidden",
            SceneEmbed { url: HERO_SCENE_URL }
            div { class: "absolute inset-0 bg-gradient-to-t from-navy/70 via-navy/50 to-transparent pointer-events-none" }
            div {
                class: "relative z-10 mx-auto max-w-7xl px-6 py-24 grid lg:grid-cols-2 gap-12",
                div {
                    class: "space-y-6",
                    span {
                        class: "inline-flex items-center gap-2 text-xs uppercase tracking-widest text-white/70",
                        span { class: "h-1 w-1 rounded-full bg-blue-400 animate-pulse" }
                        " {OWNER.availability}"
                    }
                    h1 {
                        class: "text-4xl sm:text-5xl lg:text-6xl font-bold leading-tight",
                        "{OWNER.name}"
                        span {
                            class: "block text-transparent bg-clip-text bg-gradient-to-r from-blue-400 via-cyan-300 to-purple-400",
                            "{OWNER.role}"
                        }
                    }
                    p { class: "text-white/80 max-w-xl", "{OWNER.tagline}" }
                    div {
                        class: "flex flex-wrap gap-3",
                        a {
                            href: section_anchor("projects"),
                            class: "inline-flex items-center gap-2 bg-white text-navy font-semibold px-5 py-3 rounded hover:bg-blue-50 transition",
                            "View Projects "
                            ChevronRightIcon { size: 16 }
                        }
                        a {
                            href: section_anchor("contact"),
                            class: "inline-flex items-center gap-2 border border-white/30 text-white font-semibold px-5 py-3 rounded hover:bg-white/10 transition",
                            "Contact Me"
                        }
                    }
                    div {
                        class: "flex items-center gap-4 pt-2",
                        for link in SOCIAL_LINKS.iter() {
                            a {
                                key: "{link.label}",
                                href: link.href,
                                target: link.target(),
                                rel: if link.target().is_some() { "noopener noreferrer" },
                                aria_label: link.label,
                                class: "hover:text-blue-300",
                                SocialIcon { kind: link.kind }
                            }
                        }
                    }
                }
            }
        }
    }
}
