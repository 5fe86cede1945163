use dioxus::prelude::*;

use model::CreateClientRequest;

use crate::Alert;

const DIALOG_CSS: Asset = asset!("/assets/styling/dialog.css");

/// Inline form for creating a new client.
///
/// The draft lives here, so a failed create (signalled through `error` by the
/// parent, which keeps the dialog mounted) leaves the user's input intact for
/// a retry.
#[component]
pub fn NewClientDialog(
    busy: bool,
    error: Option<String>,
    on_create: EventHandler<CreateClientRequest>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);

    let ready = !first_name().trim().is_empty()
        && !last_name().trim().is_empty()
        && !email().trim().is_empty();

    let handle_submit = move |_| {
        if !ready || busy {
            return;
        }
        on_create.call(CreateClientRequest {
            email: email().trim().to_string(),
            first_name: first_name().trim().to_string(),
            last_name: last_name().trim().to_string(),
        });
    };

    rsx! {
        document::Stylesheet { href: DIALOG_CSS }

        div {
            class: "dialog",
            h2 { "New Client" }

            div {
                class: "form-field",
                label { r#for: "new-client-first-name", "First name" }
                input {
                    id: "new-client-first-name",
                    r#type: "text",
                    placeholder: "Jane",
                    value: first_name(),
                    oninput: move |evt| first_name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "new-client-last-name", "Last name" }
                input {
                    id: "new-client-last-name",
                    r#type: "text",
                    placeholder: "Doe",
                    value: last_name(),
                    oninput: move |evt| last_name.set(evt.value()),
                }
            }

            div {
                class: "form-field",
                label { r#for: "new-client-email", "Email" }
                input {
                    id: "new-client-email",
                    r#type: "email",
                    placeholder: "jane@example.com",
                    value: email(),
                    oninput: move |evt| email.set(evt.value()),
                }
            }

            if let Some(ref message) = error {
                Alert {
                    title: "Could not create client",
                    "{message}"
                }
            }

            div {
                class: "form-actions",
                button {
                    class: "primary",
                    disabled: !ready || busy,
                    onclick: handle_submit,
                    if busy { "Creating..." } else { "Create" }
                }
                button {
                    class: "secondary",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}
