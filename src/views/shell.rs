use dioxus::prelude::*;
use crate::routes::Route;
use super::{ Footer, Navbar };

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");

/// Page chrome shared by every route: fixed header, content, footer.
#[component]
pub fn Shell() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        Navbar {}
        main {
            class: "pt-16",
            Outlet::<Route> {}
        }
        Footer {}
    }
}
