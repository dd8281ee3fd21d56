//! Sign-in modal.

use leptos::prelude::*;

use crate::ui::components::{Button, ButtonVariant, Card, CloseIcon, Input};

/// Modal login form, rendered into `#modal-root`. A failed attempt
/// re-renders this component with the error notice; success answers with a
/// page refresh so every signed-in affordance appears at once.
#[component]
pub fn SignInModal(
    /// Error text from the previous attempt, if any.
    #[prop(default = None)]
    error: Option<&'static str>,
) -> impl IntoView {
    let notice = error.map(|text| {
        view! {
            <div role="alert" class="mb-4 px-4 py-3 rounded-2xl bg-red-50 border border-red-200 text-red-700">
                {text}
            </div>
        }
    });

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/10">
            <Card class="p-8 w-full max-w-xl relative">
                <button
                    class="absolute top-6 left-8 w-10 h-10 rounded-full flex justify-center items-center hover:bg-gray-100 cursor-pointer"
                    onclick="document.getElementById('modal-root').innerHTML = ''"
                >
                    <CloseIcon/>
                </button>
                <h2 class="text-xl font-bold mb-8 text-center">"Log in or Sign up"</h2>
                <hr class="my-4 border-t"/>
                <h2 class="text-3xl mb-7">"Welcome to Singapore Rental"</h2>

                {notice}

                <form hx-post="/fragments/login" hx-target="#modal-root" hx-swap="innerHTML">
                    <Input name="username" placeholder="Username" required=true class="w-full mb-3 h-14"/>
                    <Input name="password" input_type="password" placeholder="Password" required=true class="w-full mb-6 h-14"/>
                    <Button
                        variant=ButtonVariant::Primary
                        button_type="submit"
                        class="w-full h-14 text-2xl mb-6"
                    >
                        "Continue"
                    </Button>
                </form>
                <hr class="my-4 border-t"/>
            </Card>
        </div>
    }
}
