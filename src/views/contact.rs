use dioxus::prelude::*;
use crate::components::SocialIcon;
use crate::content::{ SocialKind, SOCIAL_LINKS };

const INPUT_CLASS: &str = "mt-1 w-full px-3 py-2 rounded bg-slate-100 dark:bg-white/10 border border-transparent focus:outline-none focus:ring-2 focus:ring-blue-400";
const LABEL_CLASS: &str = "text-sm text-navy/70 dark:text-white/70";

// Mail first, then profiles. The personal site link is hero-only.
const CONTACT_ORDER: &[SocialKind] = &[SocialKind::Mail, SocialKind::Linkedin, SocialKind::Github];

/// Display-only form. There is no submission handler.
#[component]
fn ContactForm() -> Element {
    rsx! {
        form {
            class: "p-6 rounded-xl bg-white dark:bg-navy-950 border border-navy/10 dark:border-white/10",
            onsubmit: move |evt: FormEvent| evt.prevent_default(),
            div {
                class: "grid gap-4",
                div {
                    label { r#for: "contact-name", class: LABEL_CLASS, "Name" }
                    input { id: "contact-name", class: INPUT_CLASS, placeholder: "Your name" }
                }
                div {
                    label { r#for: "contact-email", class: LABEL_CLASS, "Email" }
                    input { id: "contact-email", r#type: "email", class: INPUT_CLASS, placeholder: "you@email.com" }
                }
                div {
                    label { r#for: "contact-message", class: LABEL_CLASS, "Message" }
                    textarea { id: "contact-message", rows: "4", class: INPUT_CLASS, placeholder: "Tell me about your project" }
                }
                button {
                    r#type: "button",
                    class: "inline-flex justify-center items-center gap-2 bg-gradient-to-r from-blue-500 to-purple-500 text-white font-semibold px-5 py-3 rounded hover:opacity-90",
                    "Send Message"
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let links = CONTACT_ORDER
        .iter()
        .filter_map(|kind| SOCIAL_LINKS.iter().find(|link| link.kind == *kind));

    rsx! {
        section {
            id: "contact",
            class: "py-24 bg-slate-50 dark:bg-navy-900",
            div {
                class: "mx-auto max-w-7xl px-6 grid lg:grid-cols-2 gap-12 items-start",
                div {
                    h2 { class: "text-3xl font-bold text-navy dark:text-white mb-4", "Let’s build something great" }
                    p { class: "text-navy/70 dark:text-white/70 mb-6", "I’m open to freelance, full-time roles, and collaborations." }
                    div {
                        class: "space-y-3",
                        for link in links {
                            div {
                                key: "{link.label}",
                                a {
                                    href: link.href,
                                    target: link.target(),
                                    rel: if link.target().is_some() { "noopener noreferrer" },
                                    class: "inline-flex items-center gap-2 text-navy dark:text-white hover:underline",
                                    SocialIcon { kind: link.kind, size: 18 }
                                    " {link.label}"
                                }
                            }
                        }
                    }
                }
                ContactForm {}
            }
        }
    }
}
