use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCircleExclamation;
use dioxus_free_icons::Icon;

const ALERT_CSS: Asset = asset!("/assets/styling/alert.css");

/// Inline error banner. Failures degrade to one of these; nothing in the app
/// is fatal.
#[component]
pub fn Alert(title: String, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: ALERT_CSS }

        div {
            class: "alert",
            div {
                class: "alert-icon",
                Icon { icon: FaCircleExclamation, width: 16, height: 16 }
            }
            div {
                class: "alert-body",
                span { class: "alert-title", "{title}" }
                div { class: "alert-message", {children} }
            }
        }
    }
}
