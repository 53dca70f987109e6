use dioxus::prelude::*;
use crate::content::{ Skill, SKILLS };

#[component]
fn SkillBar(skill: Skill) -> Element {
    rsx! {
        div {
            class: "p-6 rounded-xl border border-navy/10 dark:border-white/10 bg-white dark:bg-navy-900",
            div {
                class: "flex items-center justify-between mb-2",
                span { class: "font-medium text-navy dark:text-white", "{skill.name}" }
                span { class: "text-sm text-navy/60 dark:text-white/60", {skill.percent_label()} }
            }
            div {
                class: "h-2 w-full rounded bg-navy/10 dark:bg-white/10",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{skill.level}",
                div {
                    class: "h-2 rounded bg-gradient-to-r from-blue-400 to-purple-400",
                    style: skill.width_style(),
                }
            }
        }
    }
}

#[component]
pub fn Skills() -> Element {
    rsx! {
        section {
            id: "skills",
            class: "py-24 bg-white dark:bg-navy-950",
            div {
                class: "mx-auto max-w-7xl px-6",
                h2 { class: "text-3xl font-bold text-navy dark:text-white mb-10", "Skills" }
                div {
                    class: "grid md:grid-cols-2 gap-6",
                    for skill in SKILLS.iter() {
                        SkillBar { key: "{skill.name}", skill: *skill }
                    }
                }
            }
        }
    }
}
