//! Chat widget shell.

use leptos::prelude::*;

use crate::session::ChatMessage;
use crate::ui::components::ChatIcon;

use super::{ChatHeader, ChatInputArea, ChatMessageList};

/// The floating chat widget: a launcher button plus the collapsible panel
/// with header, transcript, and input. Rendered only for signed-in sessions.
#[component]
pub fn ChatWidget(transcript: Vec<ChatMessage>) -> impl IntoView {
    view! {
        <div class="fixed bottom-4 right-4 z-50" x-data="{ open: false }">
            <div class="flex flex-col items-end">
                <div
                    x-show="open"
                    x-cloak=""
                    class="w-96 bg-white rounded-xl shadow-lg overflow-hidden mb-3"
                >
                    <ChatHeader/>
                    <ChatMessageList transcript=transcript/>
                    <ChatInputArea/>
                </div>

                <button
                    x-on:click="open = !open"
                    class="w-16 h-16 rounded-full bg-blue-600 text-white cursor-pointer shadow-lg flex items-center justify-center"
                >
                    <ChatIcon/>
                </button>
            </div>
        </div>
    }
}
