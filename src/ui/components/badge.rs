//! Badge component for status indicators and tags.

use leptos::prelude::*;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Default badge style.
    #[default]
    Default,
    /// Muted secondary badge.
    Secondary,
}

impl BadgeVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "bg-blue-600 text-white",
            Self::Secondary => "bg-gray-100 text-gray-700 border border-gray-200",
        }
    }
}

/// Badge component for displaying status or labels.
#[component]
pub fn Badge(
    /// Badge variant.
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(into, default = String::new())]
    class: String,
    /// Badge content.
    children: Children,
) -> impl IntoView {
    let classes = format!(
        "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold {} {}",
        variant.classes(),
        class
    );

    view! {
        <span class=classes>
            {children()}
        </span>
    }
}
