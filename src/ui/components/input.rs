//! Text input component.

use leptos::prelude::*;

/// Styled text input.
#[component]
pub fn Input(
    /// Input name attribute.
    name: &'static str,
    /// Input type attribute.
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(default = "")]
    placeholder: &'static str,
    /// Whether the field is required.
    #[prop(default = false)]
    required: bool,
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
) -> impl IntoView {
    let classes = format!(
        "px-3 py-2 border border-gray-300 rounded-2xl text-gray-900 \
         placeholder:text-gray-400 focus:outline-none focus:ring-2 focus:ring-blue-600 {}",
        class
    );

    view! {
        <input type=input_type name=name placeholder=placeholder required=required class=classes/>
    }
}
