use dioxus::prelude::*;

use crate::components::merge_attributes;

/// Thin horizontal rule between sections.
#[component]
pub fn Separator(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "separator", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { role: "separator", ..merged }
    }
}
