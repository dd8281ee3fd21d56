//! Chat transcript rendering.

use leptos::prelude::*;

use crate::session::{ChatMessage, Speaker};

/// The transcript area, swapped wholesale after every send. Newlines in bot
/// replies are preserved with `whitespace-pre-line`.
#[component]
pub fn ChatMessageList(transcript: Vec<ChatMessage>) -> impl IntoView {
    let bubbles = transcript
        .into_iter()
        .map(|message| {
            let (align, bubble) = match message.speaker {
                Speaker::User => ("text-right", "bg-blue-600 text-white"),
                Speaker::Bot => ("text-left", "bg-white text-gray-800 border"),
            };
            view! {
                <div class=align>
                    <div class=format!("inline-block p-2 rounded-lg whitespace-pre-line {bubble}")>
                        {message.text}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div id="chat-messages" class="h-96 overflow-y-auto p-3 space-y-2 bg-gray-50">
            {bubbles}
        </div>
    }
}
