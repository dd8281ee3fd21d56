//! Chat input area.

use leptos::prelude::*;

use crate::ui::components::SendIcon;

/// Message input with HTMX form submission. The reply fragment replaces the
/// transcript; the form clears itself once the request is in flight.
#[component]
pub fn ChatInputArea() -> impl IntoView {
    view! {
        <form
            class="p-3 bg-white text-black flex gap-2"
            hx-post="/fragments/chat"
            hx-target="#chat-messages"
            hx-swap="outerHTML"
            hx-on--after-request="this.reset()"
        >
            <input
                name="prompt"
                placeholder="Ask about listings..."
                class="flex-1 px-3 py-2 border rounded-lg"
                autocomplete="off"
                required=true
            />
            <button
                type="submit"
                class="w-10 h-10 shrink-0 bg-blue-600 text-white rounded-full cursor-pointer flex items-center justify-center"
            >
                <SendIcon/>
            </button>
        </form>
    }
}
