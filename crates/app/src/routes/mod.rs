pub mod auth_shell;
pub mod email;
pub mod finance;
pub mod home;
pub mod login;
pub mod not_found;
pub mod payments;
pub mod privacy;
pub mod profile;
pub mod register;
pub mod rooms;
pub mod settings;
pub mod tenants;
pub mod terms;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBuilding, LdBuilding2, LdChevronLeft, LdChevronRight, LdCreditCard, LdLayoutDashboard,
    LdLogOut, LdMail, LdSettings, LdTrendingUp, LdUser, LdUsers,
};
use dioxus_free_icons::Icon;

use api_client::{SessionClient, TokenStore};
use shared_ui::{
    route_is_active, Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarInset,
    SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider, SidebarTrigger,
};
use std::sync::Arc;

use crate::auth::use_auth;

use email::Email;
use finance::Finance;
use home::Home;
use login::Login;
use not_found::NotFound;
use payments::Payments;
use privacy::Privacy;
use profile::Profile;
use register::Register;
use rooms::Rooms;
use settings::Settings;
use tenants::Tenants;
use terms::Terms;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/privacy")]
    Privacy {},
    #[route("/terms")]
    Terms {},
    #[layout(SessionGuard)]
    #[layout(AppLayout)]
    #[redirect("/", || Route::Home {})]
    #[route("/home")]
    Home {},
    #[route("/tenants")]
    Tenants {},
    #[route("/rooms")]
    Rooms {},
    #[route("/payments")]
    Payments {},
    #[route("/finance")]
    Finance {},
    #[route("/email")]
    Email {},
    #[route("/profile")]
    Profile {},
    #[route("/settings")]
    Settings {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Feature names keyed by route, in sidebar order. The header shows the
/// entry matching the current path, falling back to the product acronym.
const FEATURES: &[(&str, &str)] = &[
    ("/home", "Home"),
    ("/tenants", "Tenant Directory"),
    ("/rooms", "Apartment Rooms"),
    ("/payments", "Payment History"),
    ("/finance", "Finance Analytics"),
    ("/email", "Email Communications"),
    ("/profile", "Profile Management"),
    ("/settings", "Settings"),
];

fn feature_title(path: &str) -> &'static str {
    FEATURES
        .iter()
        .find(|(route, _)| route_is_active(path, route))
        .map(|(_, name)| *name)
        .unwrap_or("ATMS")
}

/// Session guard layout. Fetches the current session once per mount:
/// a valid session renders the outlet, a 401 redirects to login, and any
/// other failure keeps the dashboard usable with a header warning.
#[component]
fn SessionGuard() -> Element {
    let mut auth = use_auth();
    let client = use_context::<SessionClient>();

    let resource = use_resource(move || {
        let client = client.clone();
        async move { client.fetch_session().await }
    });

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(session)) => {
            if !auth.is_authenticated() {
                auth.set_user(session.user);
            }
            rsx! { Outlet::<Route> {} }
        }
        Some(Err(err)) if err.is_unauthorized() => {
            auth.clear_auth();
            navigator().replace(Route::Login {});
            rsx! {
                div { class: "session-guard-loading",
                    p { "Redirecting to login..." }
                }
            }
        }
        Some(Err(err)) => {
            if auth.session_error.read().is_none() {
                auth.session_error.set(Some(err.user_message()));
            }
            rsx! { Outlet::<Route> {} }
        }
        None => {
            rsx! {
                div { class: "session-guard-loading",
                    p { "Loading..." }
                }
            }
        }
    }
}

/// Main app layout with the collapsible sidebar and feature header.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let path = route.to_string();
    let title = feature_title(&path);

    let mut auth = use_auth();
    let client = use_context::<SessionClient>();
    let tokens = use_context::<Arc<dyn TokenStore>>();
    let session_error = auth.session_error.read().clone();
    let user_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|user| user.display_name());

    let sign_out = move |_| {
        let client = client.clone();
        let tokens = tokens.clone();
        tracing::debug!("signing out");
        spawn(async move {
            client.logout().await;
        });
        tokens.clear();
        auth.clear_auth();
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    Icon::<LdBuilding2> { icon: LdBuilding2, width: 22, height: 22 }
                    span { class: "sidebar-brand-name", "Thicket ATMS" }
                }

                SidebarContent {
                    SidebarMenu {
                        SidebarMenuItem {
                            Link { to: Route::Home {},
                                SidebarMenuButton { active: route_is_active(&path, "/home"),
                                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                    span { class: "sidebar-menu-label", "Home" }
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Tenants {},
                                SidebarMenuButton { active: route_is_active(&path, "/tenants"),
                                    Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
                                    span { class: "sidebar-menu-label", "Tenant Directory" }
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Rooms {},
                                SidebarMenuButton { active: route_is_active(&path, "/rooms"),
                                    Icon::<LdBuilding> { icon: LdBuilding, width: 18, height: 18 }
                                    span { class: "sidebar-menu-label", "Apartment Rooms" }
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Payments {},
                                SidebarMenuButton { active: route_is_active(&path, "/payments"),
                                    Icon::<LdCreditCard> { icon: LdCreditCard, width: 18, height: 18 }
                                    span { class: "sidebar-menu-label", "Payment History" }
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Finance {},
                                SidebarMenuButton { active: route_is_active(&path, "/finance"),
                                    Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 }
                                    span { class: "sidebar-menu-label", "Finance Analytics" }
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Email {},
                                SidebarMenuButton { active: route_is_active(&path, "/email"),
                                    Icon::<LdMail> { icon: LdMail, width: 18, height: 18 }
                                    span { class: "sidebar-menu-label", "Email Communications" }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    SidebarMenu {
                        SidebarMenuItem {
                            Link { to: Route::Profile {},
                                SidebarMenuButton { active: route_is_active(&path, "/profile"),
                                    Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                                    span { class: "sidebar-menu-label", "Profile Management" }
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Settings {},
                                SidebarMenuButton { active: route_is_active(&path, "/settings"),
                                    Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 }
                                    span { class: "sidebar-menu-label", "Settings" }
                                }
                            }
                        }
                    }
                }
            }

            SidebarInset {
                header { class: "app-header",
                    SidebarTrigger {
                        HeaderChevron {}
                    }
                    span { class: "app-header-title", "{title}" }

                    div { class: "app-header-spacer" }

                    if let Some(message) = session_error {
                        span { class: "app-header-warning", "{message}" }
                    }

                    if let Some(name) = user_name {
                        span { class: "app-header-user", "{name}" }
                    }

                    button {
                        r#type: "button",
                        class: "app-header-signout",
                        onclick: sign_out,
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Sign Out"
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// Chevron that points into the sidebar's next state.
#[component]
fn HeaderChevron() -> Element {
    let sidebar = shared_ui::use_sidebar();

    if sidebar.is_open() {
        rsx! { Icon::<LdChevronLeft> { icon: LdChevronLeft, width: 20, height: 20 } }
    } else {
        rsx! { Icon::<LdChevronRight> { icon: LdChevronRight, width: 20, height: 20 } }
    }
}

#[cfg(test)]
mod tests {
    use super::feature_title;

    #[test]
    fn header_names_the_active_feature() {
        assert_eq!(feature_title("/home"), "Home");
        assert_eq!(feature_title("/finance"), "Finance Analytics");
        assert_eq!(feature_title("/tenants/42"), "Tenant Directory");
    }

    #[test]
    fn header_falls_back_to_acronym() {
        assert_eq!(feature_title("/unmapped"), "ATMS");
    }
}
