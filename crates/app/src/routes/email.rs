use dioxus::prelude::*;

use dioxus_free_icons::icons::ld_icons::{
    LdAlignCenter, LdAlignLeft, LdAlignRight, LdBold, LdItalic, LdLink, LdList, LdListOrdered,
    LdPaperclip, LdSearch, LdStrikethrough, LdUnderline, LdX,
};
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, Input, Label};

const FORMAT_TEMPLATES: [&str; 5] = [
    "Billing Reminder",
    "Overdue Payment",
    "Lease Renewal",
    "Welcome Email",
    "Policy Update",
];

const FONT_SIZES: [&str; 4] = ["Small", "Normal", "Large", "Huge"];

/// Compose-and-search mail screen. Sending is stubbed; the compose form
/// only manages its recipient list locally.
#[component]
pub fn Email() -> Element {
    let mut recipients = use_signal(|| {
        vec![
            "johndoe@example.com".to_string(),
            "janesmith@example.com".to_string(),
            "admin@atms.com".to_string(),
            "support@atms.com".to_string(),
        ]
    });
    let mut recipient_input = use_signal(String::new);
    let mut subject = use_signal(String::new);

    let mut add_recipient = move || {
        let entry = recipient_input().trim().to_string();
        if !entry.is_empty() && !recipients().contains(&entry) {
            recipients.write().push(entry);
        }
        recipient_input.set(String::new());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        div { class: "split-page",
            div { class: "split-page-main",
                Card {
                    CardHeader {
                        CardTitle { "Send Email" }
                    }
                    CardContent {
                        form {
                            class: "compose-form",
                            onsubmit: move |evt: FormEvent| evt.prevent_default(),
                            div { class: "compose-field",
                                Label { html_for: "compose-recipient", "Recipients" }
                                div { class: "recipient-pills",
                                    for recipient in recipients() {
                                        RecipientPill {
                                            recipient,
                                            on_remove: move |removed: String| {
                                                recipients.write().retain(|r| r != &removed);
                                            },
                                        }
                                    }
                                }
                                div { class: "recipient-entry",
                                    Input {
                                        id: "compose-recipient",
                                        value: recipient_input(),
                                        on_input: move |evt: FormEvent| recipient_input.set(evt.value()),
                                        placeholder: "Enter recipient email",
                                    }
                                    Button {
                                        variant: ButtonVariant::Outline,
                                        onclick: move |_| add_recipient(),
                                        "Add"
                                    }
                                }
                            }
                            div { class: "compose-field",
                                Label { html_for: "compose-header", "Header" }
                                Input {
                                    id: "compose-header",
                                    value: subject(),
                                    on_input: move |evt: FormEvent| subject.set(evt.value()),
                                    placeholder: "Enter email subject",
                                }
                            }
                            div { class: "compose-toolbar",
                                ToolbarButton { Icon::<LdBold> { icon: LdBold, width: 16, height: 16 } }
                                ToolbarButton { Icon::<LdItalic> { icon: LdItalic, width: 16, height: 16 } }
                                ToolbarButton { Icon::<LdUnderline> { icon: LdUnderline, width: 16, height: 16 } }
                                ToolbarButton { Icon::<LdStrikethrough> { icon: LdStrikethrough, width: 16, height: 16 } }
                                select { class: "toolbar-select compose-font-size",
                                    for size in FONT_SIZES {
                                        option { "{size}" }
                                    }
                                }
                                ToolbarButton { Icon::<LdList> { icon: LdList, width: 16, height: 16 } }
                                ToolbarButton { Icon::<LdListOrdered> { icon: LdListOrdered, width: 16, height: 16 } }
                                ToolbarButton { Icon::<LdAlignLeft> { icon: LdAlignLeft, width: 16, height: 16 } }
                                ToolbarButton { Icon::<LdAlignCenter> { icon: LdAlignCenter, width: 16, height: 16 } }
                                ToolbarButton { Icon::<LdAlignRight> { icon: LdAlignRight, width: 16, height: 16 } }
                                ToolbarButton { Icon::<LdLink> { icon: LdLink, width: 16, height: 16 } }
                                ToolbarButton { Icon::<LdPaperclip> { icon: LdPaperclip, width: 16, height: 16 } }
                            }
                            textarea {
                                class: "compose-body",
                                placeholder: "Type your email here...",
                                rows: 10,
                            }
                            div { class: "compose-actions",
                                Button { button_type: "submit", "Send Email" }
                            }
                        }
                    }
                }
                Card {
                    CardHeader {
                        CardTitle { "Email Format Templates" }
                    }
                    CardContent {
                        div { class: "template-row",
                            for template in FORMAT_TEMPLATES {
                                Button { variant: ButtonVariant::Outline, "{template}" }
                            }
                        }
                    }
                }
            }
            div { class: "split-page-side",
                Card {
                    CardHeader {
                        CardTitle { "Email Search" }
                    }
                    CardContent {
                        div { class: "search-box",
                            input {
                                class: "toolbar-select search-input",
                                r#type: "text",
                                placeholder: "Search emails...",
                            }
                            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16, class: "search-icon" }
                        }
                        div { class: "email-search-filters",
                            select { class: "toolbar-select",
                                option { "Role" }
                                option { "Tenant" }
                                option { "Admin" }
                                option { "Finance" }
                                option { "Staff" }
                            }
                            select { class: "toolbar-select",
                                option { "Room" }
                                for number in 100..=105u32 {
                                    option { "{number}" }
                                }
                            }
                        }
                        div { class: "email-search-results",
                            for _ in 0..7 {
                                div { class: "email-search-result",
                                    div { class: "avatar", "J" }
                                    div { class: "email-search-result-info",
                                        span { class: "email-search-result-name", "Jane Smith" }
                                        span { class: "email-search-result-address", "janesmith@example.com" }
                                    }
                                    Badge { variant: BadgeVariant::Primary, "Tenant" }
                                }
                            }
                        }
                        div { class: "email-search-footer", "Page 1 of 30" }
                    }
                }
            }
        }
    }
}

#[component]
fn ToolbarButton(children: Element) -> Element {
    rsx! {
        button { class: "compose-tool", r#type: "button", {children} }
    }
}

#[component]
fn RecipientPill(recipient: String, on_remove: EventHandler<String>) -> Element {
    let removed = recipient.clone();
    rsx! {
        Badge { variant: BadgeVariant::Muted,
            "{recipient}"
            button {
                class: "recipient-remove",
                r#type: "button",
                onclick: move |_| on_remove.call(removed.clone()),
                Icon::<LdX> { icon: LdX, width: 12, height: 12 }
            }
        }
    }
}
