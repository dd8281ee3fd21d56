//! Chat widget header.

use leptos::prelude::*;

use crate::ui::components::{Badge, BadgeVariant, CloseIcon};

/// Header bar with the agent title, status badge, and a close button.
#[component]
pub fn ChatHeader() -> impl IntoView {
    view! {
        <div class="px-4 py-2 bg-blue-600 text-white flex items-center justify-between">
            <div class="flex items-center gap-2">
                <div class="font-semibold">"Rental Agent"</div>
                <Badge variant=BadgeVariant::Secondary>"Online"</Badge>
            </div>
            <button x-on:click="open = false" class="text-white cursor-pointer">
                <CloseIcon class="h-4 w-4"/>
            </button>
        </div>
    }
}
