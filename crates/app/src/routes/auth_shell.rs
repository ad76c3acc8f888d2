use dioxus::prelude::*;

/// Split-screen frame for the login and register pages: form on the left,
/// branding panel on the right.
#[component]
pub fn AuthSplit(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }
        div { class: "auth-split",
            div { class: "auth-split-form",
                {children}
            }
            div { class: "auth-split-brand",
                span { class: "auth-brand-title", "Thicket by Migo" }
                span { class: "auth-brand-subtitle", "Apartment-Tenant Management System" }
            }
        }
    }
}
