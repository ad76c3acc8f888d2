use dioxus::prelude::*;

use crate::routes::Route;

/// Data privacy policy, linked from the registration compliance checkboxes.
#[component]
pub fn Privacy() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        div { class: "legal-page",
            h1 { "Data Privacy Policy" }
            p {
                "The Thicket Apartment-Tenant Management System stores the account "
                "details you provide at registration (email, username, role) together "
                "with the room assignments and payment records building management "
                "enters for your tenancy."
            }
            p {
                "Your data is used only to operate the building: collecting rent, "
                "assigning rooms, and contacting you about your lease. It is never "
                "sold or shared outside building management and its payment "
                "processors."
            }
            p {
                "You may request a copy of your data or the deletion of your account "
                "through the profile page or by contacting building management "
                "directly."
            }
            Link { to: Route::Register {}, class: "legal-back", "Back to registration" }
        }
    }
}
