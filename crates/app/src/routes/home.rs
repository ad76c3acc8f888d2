use dioxus::prelude::*;

use shared_types::UserRole;
use shared_ui::{Button, Card};

use crate::auth::use_user_role;

/// Role-based dashboard. Each role gets its own tile layout; the role comes
/// from the active session.
#[component]
pub fn Home() -> Element {
    let role = use_user_role();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        match role {
            UserRole::Admin => rsx! { AdminHome {} },
            UserRole::Tenant => rsx! { TenantHome {} },
            UserRole::Finance => rsx! { FinanceHome {} },
            UserRole::Staff => rsx! { StaffHome {} },
        }
    }
}

#[component]
fn QuickActionsCard(actions: Vec<&'static str>) -> Element {
    rsx! {
        Card { class: "home-quick-actions",
            h3 { class: "home-quick-actions-title", "Quick Actions" }
            div { class: "home-quick-actions-list",
                for action in actions {
                    Button { "{action}" }
                }
            }
        }
    }
}

#[component]
fn AdminHome() -> Element {
    rsx! {
        div { class: "home-grid",
            div { class: "home-tile-row",
                Card { class: "home-tile", "System Metrics" }
                Card { class: "home-tile", "User Management" }
                Card { class: "home-tile", "Lease Overview" }
                Card { class: "home-tile", "Audit Log" }
            }
            div { class: "home-main-row",
                Card { class: "home-tile home-tile-wide", "Recent Activity" }
                QuickActionsCard { actions: vec!["Add User", "Export Data", "Manage Roles"] }
            }
        }
    }
}

#[component]
fn TenantHome() -> Element {
    rsx! {
        div { class: "home-grid",
            div { class: "home-tile-row",
                Card { class: "home-tile", "Personal Ledger" }
                Card { class: "home-tile", "Lease Details" }
                Card { class: "home-tile", "Maintenance Requests" }
                Card { class: "home-tile", "Notifications" }
            }
            div { class: "home-main-row",
                Card { class: "home-tile home-tile-wide", "Payment Timeline" }
                QuickActionsCard { actions: vec!["Pay Rent", "Submit Maintenance Request", "View Lease"] }
            }
        }
    }
}

#[component]
fn FinanceHome() -> Element {
    rsx! {
        div { class: "home-grid",
            div { class: "home-tile-row",
                Card { class: "home-tile", "Revenue Summary" }
                Card { class: "home-tile", "Arrears" }
                Card { class: "home-tile", "Upcoming Payments" }
                Card { class: "home-tile", "Analytics" }
            }
            div { class: "home-main-row",
                Card { class: "home-tile home-tile-wide", "Revenue Growth Chart" }
                QuickActionsCard { actions: vec!["Verify Payment", "Export Ledger", "Email Tenant"] }
            }
        }
    }
}

#[component]
fn StaffHome() -> Element {
    rsx! {
        div { class: "home-grid",
            div { class: "home-tile-row",
                Card { class: "home-tile", "Maintenance Queue" }
                Card { class: "home-tile", "Room Status" }
                Card { class: "home-tile", "Lease Coordination" }
                Card { class: "home-tile", "Schedule" }
            }
            div { class: "home-main-row",
                Card { class: "home-tile home-tile-wide", "Service Timeline" }
                QuickActionsCard { actions: vec!["Assign Room", "Close Ticket", "View Schedule"] }
            }
        }
    }
}
