use dioxus::prelude::*;

use shared_types::SessionUser;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Separator};

use crate::auth::use_auth;

/// Profile management page. Account rows come from the live session; the
/// room and payment sections show placeholder figures until those endpoints
/// exist.
#[component]
pub fn Profile() -> Element {
    let auth = use_auth();
    let user = auth
        .current_user
        .read()
        .clone()
        .unwrap_or_else(SessionUser::default);

    let username = user.username.clone().unwrap_or_else(|| "-".to_string());
    let email = user.email.clone().unwrap_or_else(|| "-".to_string());
    let created = user
        .created_at
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        div { class: "split-page",
            div { class: "split-page-main",
                Card {
                    CardHeader {
                        CardTitle { "Profile Information" }
                    }
                    CardContent {
                        div { class: "profile-section-title", "About You" }
                        div { class: "profile-grid",
                            InfoRow { label: "Email", value: email }
                            InfoRow { label: "Username", value: username }
                            InfoRow { label: "Role", value: user.role.as_str().to_string() }
                            InfoRow { label: "Full Name", value: user.display_name() }
                            InfoRow { label: "Phone", value: "-" }
                            InfoRow { label: "Status", value: "Active" }
                            InfoRow { label: "Account Created", value: created }
                        }
                        Separator {}
                        div { class: "profile-section-title", "Your Room" }
                        div { class: "profile-grid",
                            InfoRow { label: "Renting", value: "Yes" }
                            InfoRow { label: "Room", value: "101" }
                            InfoRow { label: "Floor", value: "1" }
                            InfoRow { label: "Type", value: "Studio" }
                            InfoRow { label: "Status", value: "Occupied" }
                            InfoRow { label: "Monthly Rent", value: "\u{20B1}12,000.00" }
                            InfoRow { label: "Lease Period", value: "2026-01-01 to 2026-12-31" }
                        }
                        Separator {}
                        div { class: "profile-section-title", "Your Payments" }
                        div { class: "profile-grid",
                            InfoRow { label: "Payments Made", value: "12" }
                            InfoRow { label: "Payments Pending", value: "1" }
                            InfoRow { label: "Total Paid", value: "\u{20B1}120,000.00" }
                            InfoRow { label: "Last Payment", value: "\u{20B1}12,000.00" }
                        }
                    }
                }
            }
            div { class: "split-page-side",
                Card {
                    CardHeader {
                        CardTitle { "Profile Actions" }
                    }
                    CardContent {
                        div { class: "profile-actions",
                            Button { variant: ButtonVariant::Outline, "Edit Info" }
                            Button { variant: ButtonVariant::Outline, "Change Password" }
                            Button { variant: ButtonVariant::Outline, "Export Data" }
                            Button { variant: ButtonVariant::Outline, "Manage Sessions" }
                            Button { class: "button-danger", "Logout" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InfoRow(label: &'static str, value: String) -> Element {
    rsx! {
        div { class: "profile-row",
            span { class: "profile-row-label", "{label}" }
            span { class: "profile-row-value", "{value}" }
        }
    }
}
