use dioxus::prelude::*;

use dioxus_free_icons::icons::ld_icons::LdLock;
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Card};

use crate::format::format_peso;

const ROOM_TYPES: [&str; 4] = ["Studio", "1BR", "2BR", "3BR"];
/// Estimated rent per occupied room, used for the revenue stat.
const BASE_RENT: u32 = 12_000;

#[derive(Clone, PartialEq)]
struct MockRoom {
    number: u32,
    floor: u32,
    kind: &'static str,
    tenant: Option<(String, String)>,
}

impl MockRoom {
    fn occupied(&self) -> bool {
        self.tenant.is_some()
    }
}

fn mock_rooms() -> Vec<MockRoom> {
    (0..12)
        .map(|i| MockRoom {
            number: 100 + i,
            floor: i / 4 + 1,
            kind: ROOM_TYPES[(i % 4) as usize],
            tenant: if i % 5 == 0 {
                None
            } else {
                Some((
                    format!("John Doe {}", i + 1),
                    format!("johndoe{}@example.com", i + 1),
                ))
            },
        })
        .collect()
}

/// Apartment rooms: occupancy grid with floor navigation and stat cards.
#[component]
pub fn Rooms() -> Element {
    let rooms = mock_rooms();
    let vacant = rooms.iter().filter(|r| !r.occupied()).count();
    let occupied = rooms.len() - vacant;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        div { class: "split-page",
            div { class: "split-page-main",
                Card { class: "toolbar",
                    div { class: "toolbar-filters",
                        select { class: "toolbar-select",
                            option { "Type" }
                            for kind in ROOM_TYPES {
                                option { "{kind}" }
                            }
                        }
                        select { class: "toolbar-select",
                            option { "Status" }
                            option { "Occupied" }
                            option { "Vacant" }
                        }
                    }
                    div { class: "toolbar-actions",
                        Button { variant: ButtonVariant::Outline, "Export CSV" }
                    }
                }
                Card { class: "directory",
                    div { class: "directory-grid",
                        for room in rooms {
                            if let Some((name, email)) = room.tenant.clone() {
                                Card { class: "room-card",
                                    div { class: "avatar avatar-lg", {name.chars().next().unwrap_or('-').to_string()} }
                                    div { class: "room-card-number", "Room {room.number}" }
                                    div { class: "room-card-meta", "{room.kind} \u{2022} Floor {room.floor}" }
                                    div { class: "room-card-tenant",
                                        div { "{name}" }
                                        div { class: "room-card-email", "{email}" }
                                    }
                                    Button { "View" }
                                }
                            } else {
                                Card { class: "room-card room-card-vacant",
                                    div { class: "avatar avatar-lg", "--" }
                                    div { class: "room-card-number", "Room {room.number}" }
                                    div { class: "room-card-meta", "{room.kind} \u{2022} Floor {room.floor}" }
                                    div { class: "room-card-unassigned",
                                        Icon::<LdLock> { icon: LdLock, width: 14, height: 14 }
                                        "Unassigned"
                                    }
                                    Button { variant: ButtonVariant::Outline, class: "button-assign", "Assign" }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "split-page-side",
                Card { class: "floor-nav",
                    div { class: "floor-nav-title", "Floors" }
                    div { class: "floor-nav-grid",
                        for floor in 1..=14u32 {
                            Button { variant: ButtonVariant::Outline, "{floor}" }
                        }
                    }
                }
                Card { class: "stat-card",
                    span { class: "stat-card-label", "Total Available Rooms" }
                    span { class: "stat-card-value stat-positive", "{vacant}" }
                    span { class: "stat-card-caption", "Rooms currently vacant" }
                }
                Card { class: "stat-card",
                    span { class: "stat-card-label", "Total Occupied Rooms" }
                    span { class: "stat-card-value stat-accent", "{occupied}" }
                    span { class: "stat-card-caption", "Rooms currently occupied" }
                }
                Card { class: "stat-card",
                    span { class: "stat-card-label", "Monthly Revenue" }
                    span { class: "stat-card-value", {format_peso(occupied as u32 * BASE_RENT)} }
                    span { class: "stat-card-caption", "Estimated from occupied rooms" }
                }
                Card { class: "stat-card",
                    span { class: "stat-card-label", "Overdue Payments" }
                    span { class: "stat-card-value stat-negative", {format_peso(occupied as u32 * 1_200)} }
                    span { class: "stat-card-caption", "Based on migration schema" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_fifth_room_is_vacant() {
        let rooms = mock_rooms();
        let vacant: Vec<u32> = rooms
            .iter()
            .filter(|r| !r.occupied())
            .map(|r| r.number)
            .collect();
        assert_eq!(vacant, vec![100, 105, 110]);
    }
}
