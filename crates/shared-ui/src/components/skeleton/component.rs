use dioxus::prelude::*;

use crate::components::merge_attributes;

/// Pulsing placeholder block shown while content is loading or a layout
/// transition is in flight.
#[component]
pub fn Skeleton(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "skeleton", None, false)];
    let merged = merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { ..merged }
    }
}
