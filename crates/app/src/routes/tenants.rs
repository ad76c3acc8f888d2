use dioxus::prelude::*;

use dioxus_free_icons::icons::ld_icons::LdUsers;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card, Pagination};

/// Registered tenants shown per page in the directory grid.
const PAGE_SIZE: usize = 16;
/// Placeholder directory size until the tenants API lands.
const TOTAL_TENANTS: usize = 128;

struct MockTenant {
    initial: char,
    name: String,
    email: String,
    unit: String,
}

fn mock_tenants(offset: usize, limit: usize) -> Vec<MockTenant> {
    (offset..(offset + limit).min(TOTAL_TENANTS))
        .map(|i| MockTenant {
            initial: (b'A' + (i % 26) as u8) as char,
            name: format!("John Doe {}", i + 1),
            email: format!("johndoe{}@example.com", i + 1),
            unit: format!("Apt. {} - 2BR", 100 + i),
        })
        .collect()
}

/// Tenant directory: filterable card grid with a pinned profile preview.
#[component]
pub fn Tenants() -> Element {
    let offset = use_signal(|| 0usize);
    let tenants = mock_tenants(offset(), PAGE_SIZE);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        div { class: "split-page",
            div { class: "split-page-main",
                Card { class: "toolbar",
                    div { class: "toolbar-filters",
                        select { class: "toolbar-select",
                            option { "Role" }
                            option { "Tenant" }
                            option { "Admin" }
                            option { "Staff" }
                        }
                        select { class: "toolbar-select",
                            option { "Status" }
                            option { "Active" }
                            option { "Inactive" }
                        }
                    }
                    div { class: "toolbar-actions",
                        Button { "Add Tenant" }
                        Button { variant: ButtonVariant::Outline, "Export CSV" }
                    }
                }
                Card { class: "directory",
                    div { class: "directory-grid",
                        for tenant in tenants {
                            Card { class: "tenant-card",
                                div { class: "avatar avatar-lg", "{tenant.initial}" }
                                div { class: "tenant-card-name", "{tenant.name}" }
                                div { class: "tenant-card-email", "{tenant.email}" }
                                div { class: "tenant-card-unit", "{tenant.unit}" }
                            }
                        }
                    }
                    Pagination { total: TOTAL_TENANTS, offset, limit: PAGE_SIZE }
                }
            }
            div { class: "split-page-side",
                Card { class: "stat-card",
                    Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18, class: "stat-card-icon" }
                    span { class: "stat-card-value", "{TOTAL_TENANTS}" }
                    span { class: "stat-card-caption",
                        "Number of tenants currently registered on the Fuchsia ATMS"
                    }
                }
                Card { class: "profile-preview",
                    div { class: "profile-preview-avatar",
                        div { class: "avatar avatar-xl", "J" }
                    }
                    div { class: "profile-preview-rows",
                        ProfileRow { label: "Username", value: "johndoe1" }
                        ProfileRow { label: "Full Name", value: "Johnathan Doe the First" }
                        ProfileRow { label: "Email", value: "johndoe1@example.com" }
                        ProfileRow { label: "Phone", value: "+63 912 345 6789" }
                        ProfileRow { label: "Status", value: "Active" }
                        ProfileRow { label: "Room", value: "Apt. 101 - 2BR" }
                    }
                    div { class: "profile-preview-actions",
                        Button { "View Full" }
                        Button { variant: ButtonVariant::Outline, "Edit" }
                        Button { variant: ButtonVariant::Outline, class: "button-danger", "Delete" }
                    }
                }
            }
        }
    }
}

#[component]
fn ProfileRow(label: &'static str, value: &'static str) -> Element {
    rsx! {
        div { class: "profile-row",
            span { class: "profile-row-label", "{label}" }
            span { class: "profile-row-value", "{value}" }
        }
    }
}
