use std::rc::Rc;
use dioxus::prelude::*;
use portfolio::utils::{ apply_theme_class, ThemePreference, ThemeState };
use portfolio::Route;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/styling/main.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    portfolio::init_logging();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let preference = use_context_provider(|| Rc::new(ThemePreference::for_platform()));
    let theme = use_signal(|| ThemeState::resolve(&preference));
    use_context_provider(|| theme);

    use_effect(move || apply_theme_class(theme().flag));

    rsx! {
        div {
            class: theme().root_class(),
            document::Link { rel: "icon", href: FAVICON }
            document::Link { rel: "stylesheet", href: MAIN_CSS }
            document::Link { rel: "stylesheet", href: TAILWIND_CSS }
            div {
                class: "min-h-screen bg-white dark:bg-navy-950",
                Router::<Route> {}
            }
        }
    }
}
