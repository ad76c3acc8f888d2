use dioxus::prelude::*;

use crate::components::merge_attributes;

#[derive(Props, Clone, PartialEq)]
pub struct CheckboxProps {
    pub checked: bool,
    pub on_checked_change: EventHandler<bool>,
    #[props(default = false)]
    pub required: bool,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// Native checkbox with an inline label, used for compliance agreements.
#[component]
pub fn Checkbox(props: CheckboxProps) -> Element {
    let base = vec![Attribute::new("class", "checkbox", None, false)];
    let merged = merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        label {
            ..merged,
            input {
                r#type: "checkbox",
                checked: props.checked,
                required: props.required,
                onchange: move |evt: FormEvent| props.on_checked_change.call(evt.checked()),
            }
            span { {props.children} }
        }
    }
}
