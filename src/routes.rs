use dioxus::prelude::*;
use crate::views::{ Home, Shell };

// Sections are reached through in-page anchors, so the site has a single route.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home,
}
