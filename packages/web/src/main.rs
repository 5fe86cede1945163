use dioxus::prelude::*;

use views::{ClientDetail, Clients};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/clients")]
    Clients {},
    #[route("/clients/:id")]
    ClientDetail { id: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Redirect `/` to `/clients`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Clients {});
    rsx! {}
}
