//! Input components for the credential form

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Password => "password",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct TextInputProps {
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    pub input_class: String,
    pub on_change: EventHandler<String>,
}

/// Controlled input: value comes from state, every keystroke goes back
/// through `on_change`.
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}
