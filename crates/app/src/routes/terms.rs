use dioxus::prelude::*;

use crate::routes::Route;

/// Terms and conditions, linked from the registration compliance checkboxes.
#[component]
pub fn Terms() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        div { class: "legal-page",
            h1 { "Terms & Conditions" }
            p {
                "By creating an account on the Thicket Apartment-Tenant Management "
                "System you agree to use it only for managing your tenancy, to keep "
                "your credentials private, and to provide accurate information in "
                "your profile and payment records."
            }
            p {
                "Building management may suspend accounts that abuse the platform, "
                "misrepresent payment status, or attempt to access another tenant's "
                "records. Rent, billing, and lease terms remain governed by your "
                "signed lease agreement; this platform only records them."
            }
            p {
                "These terms may change as the platform evolves. Continued use of "
                "the system after an update counts as acceptance of the revised terms."
            }
            Link { to: Route::Register {}, class: "legal-back", "Back to registration" }
        }
    }
}
