use dioxus::prelude::*;
use crate::components::ExternalLinkIcon;
use crate::content::{ Project, PROJECTS };

#[component]
fn ProjectCard(project: Project) -> Element {
    rsx! {
        a {
            href: project.link,
            class: "group rounded-xl bg-white dark:bg-navy-950 border border-navy/10 dark:border-white/10 p-6 hover:-translate-y-1 hover:shadow-xl transition",
            div { class: "h-40 rounded-lg bg-gradient-to-br from-blue-200/40 to-purple-200/40 dark:from-blue-400/10 dark:to-purple-400/10 mb-4" }
            h3 { class: "font-semibold text-navy dark:text-white", "{project.title}" }
            p { class: "text-sm text-navy/70 dark:text-white/70 mt-1", "{project.description}" }
            div {
                class: "mt-3 flex flex-wrap gap-2",
                for tag in project.stack.iter() {
                    span {
                        key: "{tag}",
                        class: "text-xs px-2 py-1 rounded bg-blue-50 text-navy dark:bg-white/10 dark:text-white/80",
                        "{tag}"
                    }
                }
            }
        }
    }
}

#[component]
pub fn Projects() -> Element {
    rsx! {
        section {
            id: "projects",
            class: "py-24 bg-slate-50 dark:bg-navy-900",
            div {
                class: "mx-auto max-w-7xl px-6",
                div {
                    class: "flex items-end justify-between mb-10",
                    h2 { class: "text-3xl font-bold text-navy dark:text-white", "Projects" }
                    a {
                        href: "#",
                        class: "text-sm inline-flex items-center gap-1 text-navy/70 dark:text-white/70 hover:underline",
                        "See all "
                        ExternalLinkIcon { size: 16 }
                    }
                }
                div {
                    class: "grid md:grid-cols-3 gap-6",
                    for project in PROJECTS.iter() {
                        ProjectCard { key: "{project.title}", project: *project }
                    }
                }
            }
        }
    }
}
