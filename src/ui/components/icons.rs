//! SVG icon components.

use leptos::prelude::*;

/// Heart icon used for the favourite toggle. `filled` switches between the
/// liked and idle fills.
#[component]
pub fn HeartIcon(
    /// Whether the heart renders in its liked state.
    #[prop(default = false)]
    filled: bool,
    /// Additional CSS classes.
    #[prop(default = "w-7 h-7")]
    class: &'static str,
) -> impl IntoView {
    let fill = if filled {
        "rgba(223, 16, 71, 0.62)"
    } else {
        "rgba(229, 231, 235, 0.4)"
    };

    view! {
        <svg fill=fill viewBox="0 0 24 24" stroke-width="2.2" stroke="white" class=class>
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M4.318 6.318a5.5 5.5 0 0 1 7.778 0l.904.903.904-.903a5.5 5.5 0 1 1 7.778 7.778l-8.682 8.682a1 1 0 0 1-1.414 0l-8.682-8.682a5.5 5.5 0 0 1 0-7.778z"
            />
        </svg>
    }
}

/// Magnifier icon for the search box.
#[component]
pub fn SearchIcon(
    #[prop(default = "h-5 w-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <circle cx="11" cy="11" r="8"/>
            <line x1="21" y1="21" x2="16.65" y2="16.65"/>
        </svg>
    }
}

/// Hamburger icon for the navbar menu.
#[component]
pub fn MenuIcon(
    #[prop(default = "h-5 w-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <line x1="3" y1="6" x2="21" y2="6"/>
            <line x1="3" y1="12" x2="21" y2="12"/>
            <line x1="3" y1="18" x2="21" y2="18"/>
        </svg>
    }
}

/// Speech-bubble icon for the chat launcher.
#[component]
pub fn ChatIcon(
    #[prop(default = "h-7 w-7")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"/>
        </svg>
    }
}

/// Send icon for the chat input.
#[component]
pub fn SendIcon(
    #[prop(default = "h-5 w-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <line x1="12" y1="19" x2="12" y2="5"/>
            <polyline points="5 12 12 5 19 12"/>
        </svg>
    }
}

/// Close icon for modals and the chat header.
#[component]
pub fn CloseIcon(
    #[prop(default = "h-5 w-5")] class: &'static str,
) -> impl IntoView {
    view! {
        <svg class=class xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
            <line x1="18" y1="6" x2="6" y2="18"/>
            <line x1="6" y1="6" x2="18" y2="18"/>
        </svg>
    }
}
