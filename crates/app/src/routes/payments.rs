use chrono::NaiveDate;
use dioxus::prelude::*;

use dioxus_free_icons::icons::ld_icons::{
    LdCalendarCheck, LdCreditCard, LdFilter, LdSearch, LdTriangleAlert,
};
use dioxus_free_icons::Icon;
use shared_ui::{Badge, BadgeVariant, Button, Card};

use crate::format::{format_peso, month_heading};

const PAYMENT_TYPES: [&str; 5] = ["All", "Rent", "Deposit", "Utilities", "Other"];
const PAYMENT_STATUSES: [&str; 4] = ["All", "Paid", "Pending", "Overdue"];

#[derive(Clone, Copy, PartialEq, Eq)]
enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

#[derive(Clone, PartialEq)]
struct MockPayment {
    payer: &'static str,
    email: &'static str,
    avatar: char,
    kind: &'static str,
    reason: &'static str,
    amount: u32,
    status: PaymentStatus,
    date: NaiveDate,
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid mock date")
}

fn mock_payments() -> Vec<MockPayment> {
    vec![
        MockPayment {
            payer: "John Doe",
            email: "john@example.com",
            avatar: 'J',
            kind: "Rent",
            reason: "Monthly Rent",
            amount: 10_000,
            status: PaymentStatus::Paid,
            date: day(2026, 2, 1),
        },
        MockPayment {
            payer: "Jane Smith",
            email: "jane@example.com",
            avatar: 'J',
            kind: "Utilities",
            reason: "Water Bill",
            amount: 1_200,
            status: PaymentStatus::Pending,
            date: day(2026, 2, 3),
        },
        MockPayment {
            payer: "Anna Cruz",
            email: "anna@example.com",
            avatar: 'A',
            kind: "Rent",
            reason: "Monthly Rent",
            amount: 8_000,
            status: PaymentStatus::Paid,
            date: day(2026, 2, 5),
        },
        MockPayment {
            payer: "Ben Lim",
            email: "ben@example.com",
            avatar: 'B',
            kind: "Utilities",
            reason: "Electricity Bill",
            amount: 1_500,
            status: PaymentStatus::Paid,
            date: day(2026, 2, 7),
        },
        MockPayment {
            payer: "Carlos Tan",
            email: "carlos@example.com",
            avatar: 'C',
            kind: "Deposit",
            reason: "Security Deposit",
            amount: 5_000,
            status: PaymentStatus::Paid,
            date: day(2026, 1, 28),
        },
        MockPayment {
            payer: "Maria Lopez",
            email: "maria@example.com",
            avatar: 'M',
            kind: "Other",
            reason: "Key Replacement",
            amount: 500,
            status: PaymentStatus::Overdue,
            date: day(2026, 1, 25),
        },
        MockPayment {
            payer: "David Ong",
            email: "david@example.com",
            avatar: 'D',
            kind: "Rent",
            reason: "Monthly Rent",
            amount: 9_000,
            status: PaymentStatus::Paid,
            date: day(2026, 1, 15),
        },
        MockPayment {
            payer: "Ella Yu",
            email: "ella@example.com",
            avatar: 'E',
            kind: "Utilities",
            reason: "Internet Bill",
            amount: 1_000,
            status: PaymentStatus::Pending,
            date: day(2026, 1, 10),
        },
    ]
}

/// Group payments by calendar month, newest first within and across groups.
fn grouped_by_month(mut payments: Vec<MockPayment>) -> Vec<(String, Vec<MockPayment>)> {
    payments.sort_by(|a, b| b.date.cmp(&a.date));
    let mut groups: Vec<(String, Vec<MockPayment>)> = Vec::new();
    for payment in payments {
        let heading = month_heading(payment.date);
        match groups.last_mut() {
            Some((current, items)) if *current == heading => items.push(payment),
            _ => groups.push((heading, vec![payment])),
        }
    }
    groups
}

/// Payment history: summary cards, filters, and a month-grouped ledger.
#[component]
pub fn Payments() -> Element {
    let groups = grouped_by_month(mock_payments());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        div { class: "payments-page",
            div { class: "summary-row",
                SummaryCard { label: "Total Collected", value: format_peso(120_000),
                    Icon::<LdCreditCard> { icon: LdCreditCard, width: 22, height: 22 }
                }
                SummaryCard { label: "Pending Payments", value: format_peso(8_500),
                    Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 22, height: 22 }
                }
                SummaryCard { label: "Overdue", value: format_peso(2_000),
                    Icon::<LdTriangleAlert> { icon: LdTriangleAlert, width: 22, height: 22 }
                }
                SummaryCard { label: "Upcoming", value: format_peso(5_000),
                    Icon::<LdCalendarCheck> { icon: LdCalendarCheck, width: 22, height: 22 }
                }
            }

            div { class: "payments-filters",
                div { class: "payments-filter-group",
                    FilterSelect { label: "Type", options: PAYMENT_TYPES.to_vec() }
                    FilterSelect { label: "Status", options: PAYMENT_STATUSES.to_vec() }
                    div { class: "filter-field",
                        label { class: "filter-label", r#for: "date-from", "From" }
                        input { class: "toolbar-select", id: "date-from", r#type: "date" }
                    }
                    div { class: "filter-field",
                        label { class: "filter-label", r#for: "date-to", "To" }
                        input { class: "toolbar-select", id: "date-to", r#type: "date" }
                    }
                }
                div { class: "payments-filter-group payments-filter-right",
                    div { class: "filter-field",
                        label { class: "filter-label", r#for: "search-input", "Search" }
                        div { class: "search-box",
                            input {
                                class: "toolbar-select search-input",
                                id: "search-input",
                                r#type: "text",
                                placeholder: "Search user, room...",
                            }
                            Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16, class: "search-icon" }
                        }
                    }
                    Button {
                        Icon::<LdFilter> { icon: LdFilter, width: 16, height: 16 }
                        "More Filters"
                    }
                }
            }

            div { class: "payments-log",
                for (heading, items) in groups {
                    div { class: "payments-month", "{heading}" }
                    div { class: "payments-month-items",
                        for payment in items {
                            TransactionItem { payment }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryCard(label: String, value: String, children: Element) -> Element {
    rsx! {
        Card { class: "stat-card",
            div { class: "stat-card-icon", {children} }
            span { class: "stat-card-value", "{value}" }
            span { class: "stat-card-caption stat-caption-italic", "{label}" }
        }
    }
}

#[component]
fn FilterSelect(label: &'static str, options: Vec<&'static str>) -> Element {
    rsx! {
        div { class: "filter-field",
            label { class: "filter-label", "{label}" }
            select { class: "toolbar-select",
                for option_label in options {
                    option { "{option_label}" }
                }
            }
        }
    }
}

#[component]
fn TransactionItem(payment: MockPayment) -> Element {
    let late = payment.status == PaymentStatus::Overdue;
    let (variant, badge) = if late {
        (BadgeVariant::Danger, "Late")
    } else {
        (BadgeVariant::Success, "On Time")
    };

    rsx! {
        Card { class: "transaction",
            div { class: "transaction-main",
                div { class: "avatar", "{payment.avatar}" }
                div { class: "transaction-details",
                    div { class: "transaction-amount-row",
                        span { class: "transaction-amount", {format_peso(payment.amount)} }
                        Badge { variant, "{badge}" }
                    }
                    span { class: "transaction-payer", "{payment.payer}" }
                    span { class: "transaction-email", "{payment.email}" }
                }
            }
            div { class: "transaction-side",
                span { class: "transaction-kind", "{payment.kind}" }
                span { class: "transaction-reason", "{payment.reason}" }
                span { class: "transaction-date", "{payment.date}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ledger_groups_are_newest_first() {
        let groups = grouped_by_month(mock_payments());
        let headings: Vec<&str> = groups.iter().map(|(h, _)| h.as_str()).collect();
        assert_eq!(headings, vec!["February 2026", "January 2026"]);
    }

    #[test]
    fn items_within_a_month_are_newest_first() {
        let groups = grouped_by_month(mock_payments());
        let february = &groups[0].1;
        let dates: Vec<NaiveDate> = february.iter().map(|p| p.date).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted);
    }
}
