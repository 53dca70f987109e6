use dioxus::prelude::*;
use crate::content::{ ABOUT_HIGHLIGHTS, ABOUT_IMAGE_ALT, ABOUT_IMAGE_URL, ABOUT_SUMMARY };

#[component]
pub fn About() -> Element {
    rsx! {
        section {
            id: "about",
            class: "relative py-24 bg-white dark:bg-navy-950 text-navy dark:text-white",
            div {
                class: "mx-auto max-w-7xl px-6 grid md:grid-cols-2 gap-12 items-center",
                div {
                    class: "rounded-xl overflow-hidden ring-1 ring-navy/10 dark:ring-white/10",
                    img {
                        src: ABOUT_IMAGE_URL,
                        alt: ABOUT_IMAGE_ALT,
                        class: "w-full h-80 object-cover",
                    }
                }
                div {
                    h2 { class: "text-3xl font-bold mb-4", "About Me" }
                    p { class: "text-navy/80 dark:text-white/80", "{ABOUT_SUMMARY}" }
                    ul {
                        class: "mt-6 grid sm:grid-cols-2 gap-3 text-sm",
                        for highlight in ABOUT_HIGHLIGHTS.iter() {
                            li {
                                key: "{highlight}",
                                class: "p-3 rounded border border-navy/10 dark:border-white/10",
                                "{highlight}"
                            }
                        }
                    }
                }
            }
        }
    }
}
