use dioxus::core::Task;
use dioxus::prelude::*;

use crate::components::merge_attributes;

use super::transition::{sleep_ms, TransitionGate, TRANSITION_MS};

// ─── Context ───────────────────────────────────────────────────────────

/// Shared state for controlling sidebar open/closed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SidebarState {
    pub open: bool,
    /// Raised while the width animation runs. Consumers that render heavy
    /// content can show a placeholder until it drops.
    pub transitioning: bool,
}

/// Handle for reading and driving the sidebar from anywhere in the tree.
#[derive(Clone, Copy, PartialEq)]
pub struct SidebarController {
    state: Signal<SidebarState>,
    gate: Signal<TransitionGate>,
    pending: Signal<Option<Task>>,
}

impl SidebarController {
    fn new(default_open: bool) -> Self {
        Self {
            state: Signal::new(SidebarState {
                open: default_open,
                transitioning: false,
            }),
            gate: Signal::new(TransitionGate::default()),
            pending: Signal::new(None),
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.read().open
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.read().transitioning
    }

    /// Flip the sidebar and restart the transition window. A toggle during
    /// an in-flight animation cancels the earlier timer, so the flag stays
    /// raised for a full window measured from the latest toggle.
    pub fn toggle(&mut self) {
        if let Some(task) = self.pending.write().take() {
            task.cancel();
        }
        let generation = self.gate.write().arm();

        {
            let mut state = self.state.write();
            state.open = !state.open;
            state.transitioning = true;
        }

        let gate = self.gate;
        let mut state = self.state;
        let mut pending = self.pending;
        let task = spawn(async move {
            sleep_ms(TRANSITION_MS).await;
            if gate.peek().is_current(generation) {
                state.write().transitioning = false;
                pending.set(None);
            }
        });
        self.pending.set(Some(task));
    }

    /// Collapse if currently open, used by the mobile backdrop.
    pub fn close(&mut self) {
        if self.state.peek().open {
            self.toggle();
        }
    }
}

/// Provides the sidebar controller context to children.
#[component]
pub fn SidebarProvider(#[props(default = true)] default_open: bool, children: Element) -> Element {
    let controller = use_context_provider(|| SidebarController::new(default_open));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            class: "sidebar-provider",
            "data-sidebar-open": if controller.is_open() { "true" } else { "false" },
            {children}
        }
    }
}

/// Hook to access the sidebar controller.
pub fn use_sidebar() -> SidebarController {
    use_context::<SidebarController>()
}

// ─── Routing helper ────────────────────────────────────────────────────

/// Whether a nav entry pointing at `route` should render as active for the
/// current `path`. A route matches itself and any descendant path, but not
/// sibling routes that merely share a prefix.
pub fn route_is_active(path: &str, route: &str) -> bool {
    path == route || path.starts_with(&format!("{route}/"))
}

// ─── Layout components ─────────────────────────────────────────────────

/// The main sidebar container. Collapses based on context state.
/// On mobile viewports, shows a backdrop overlay when open.
#[component]
pub fn Sidebar(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut controller = use_sidebar();
    let is_open = controller.is_open();

    let base = vec![
        Attribute::new("class", "sidebar", None, false),
        Attribute::new(
            "data-state",
            if is_open { "open" } else { "closed" },
            None,
            false,
        ),
    ];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        // Mobile backdrop overlay, closes the sidebar when tapped
        if is_open {
            div {
                class: "sidebar-backdrop",
                onclick: move |_| controller.close(),
            }
        }
        aside {
            ..merged,
            {children}
        }
    }
}

/// Header section inside the Sidebar.
#[component]
pub fn SidebarHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-header", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Scrollable content area of the Sidebar.
#[component]
pub fn SidebarContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-content", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Footer section inside the Sidebar.
#[component]
pub fn SidebarFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-footer", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Group components ──────────────────────────────────────────────────

/// A group of related sidebar items.
#[component]
pub fn SidebarGroup(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-group", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

/// Label for a SidebarGroup.
#[component]
pub fn SidebarGroupLabel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-group-label", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            ..merged,
            {children}
        }
    }
}

// ─── Menu components ───────────────────────────────────────────────────

/// Navigation menu list inside the sidebar.
#[component]
pub fn SidebarMenu(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            {children}
        }
    }
}

/// A single item in a SidebarMenu.
#[component]
pub fn SidebarMenuItem(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-menu-item", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        li {
            ..merged,
            {children}
        }
    }
}

/// Interactive button within a SidebarMenuItem.
#[component]
pub fn SidebarMenuButton(
    #[props(default = false)] active: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "sidebar-menu-button", None, false),
        Attribute::new(
            "data-active",
            if active { "true" } else { "false" },
            None,
            false,
        ),
    ];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            ..merged,
            {children}
        }
    }
}

// ─── Utility components ────────────────────────────────────────────────

/// Toggle button that opens/closes the sidebar.
#[component]
pub fn SidebarTrigger(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let mut controller = use_sidebar();

    let base = vec![Attribute::new("class", "sidebar-trigger", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        button {
            r#type: "button",
            "aria-label": "Toggle sidebar",
            onclick: move |_| controller.toggle(),
            ..merged,
            {children}
        }
    }
}

/// Visual separator line inside the sidebar.
#[component]
pub fn SidebarSeparator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-separator", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        hr {
            ..merged,
        }
    }
}

/// The main content area that sits alongside the Sidebar. Adjusts margin
/// based on sidebar open/closed state.
#[component]
pub fn SidebarInset(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "sidebar-inset", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        main {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::route_is_active;

    #[test]
    fn exact_path_is_active() {
        assert!(route_is_active("/rooms", "/rooms"));
    }

    #[test]
    fn descendant_path_is_active() {
        assert!(route_is_active("/rooms/42", "/rooms"));
        assert!(route_is_active("/tenants/7/history", "/tenants"));
    }

    #[test]
    fn prefix_sibling_is_not_active() {
        assert!(!route_is_active("/roomster", "/rooms"));
        assert!(!route_is_active("/finance-reports", "/finance"));
    }

    #[test]
    fn unrelated_path_is_not_active() {
        assert!(!route_is_active("/payments", "/rooms"));
    }
}
