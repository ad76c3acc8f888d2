use dioxus::prelude::*;

use crate::components::merge_attributes;

#[derive(Props, Clone, PartialEq)]
pub struct InputProps {
    pub value: String,
    pub on_input: EventHandler<FormEvent>,
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default)]
    pub placeholder: String,
    #[props(default = false)]
    pub required: bool,
    #[props(default = false)]
    pub disabled: bool,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
}

/// Controlled text input with the shared form styling.
#[component]
pub fn Input(props: InputProps) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = merge_attributes(vec![base, props.attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{props.input_type}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            required: props.required,
            disabled: props.disabled,
            oninput: move |evt| props.on_input.call(evt),
            ..merged,
        }
    }
}
