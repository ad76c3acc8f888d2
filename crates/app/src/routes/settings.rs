use dioxus::prelude::*;

use dioxus_free_icons::icons::ld_icons::LdWrench;
use dioxus_free_icons::Icon;

/// Settings has no backing features yet; show the work-in-progress notice.
#[component]
pub fn Settings() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./pages.css") }
        div { class: "wip-page",
            Icon::<LdWrench> { icon: LdWrench, width: 48, height: 48 }
            h2 { class: "wip-title", "Page is still work-in-progress!" }
            p { class: "wip-note",
                "We're actively building this page to bring you new features and improvements. "
                "Please check back soon or explore other sections of the dashboard in the meantime!"
            }
        }
    }
}
