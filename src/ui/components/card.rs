//! Card component for panels and modal bodies.

use leptos::prelude::*;

/// Card container component.
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!("bg-white rounded-2xl shadow-md text-gray-900 {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}

/// Card content section.
#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Content.
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 {}", class);

    view! {
        <div class=classes>
            {children()}
        </div>
    }
}
