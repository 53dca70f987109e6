use dioxus::prelude::*;
use super::{ About, Contact, Hero, Projects, Skills };

#[component]
pub fn Home() -> Element {
    rsx! {
        Hero {}
        About {}
        Projects {}
        Skills {}
        Contact {}
    }
}
