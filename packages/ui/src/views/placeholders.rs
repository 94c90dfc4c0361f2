use dioxus::prelude::*;

/// Neutral screen shown while the startup session check runs.
#[component]
pub fn LoadingPlaceholder() -> Element {
    rsx! {
        div {
            class: "flex-1 flex items-center justify-center min-h-screen",
            div { class: "spinner", aria_label: "Loading" }
        }
    }
}

/// Shown when the signed-in user's role may not open a screen.
#[component]
pub fn UnauthorizedView(on_back: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "flex-1 flex flex-col items-center justify-center min-h-screen",
            h1 { class: "m-0 mb-2 text-2xl font-bold text-neutral-800", "Unauthorized" }
            p { class: "m-0 mb-4 text-sm text-neutral-600", "You do not have permission to view this page." }
            button {
                class: "login-btn",
                onclick: move |_| on_back.call(()),
                "Back to dashboard"
            }
        }
    }
}

/// Empty state for a screen whose content lives outside the session core.
#[component]
pub fn ScreenPlaceholder(title: String, #[props(default)] description: String) -> Element {
    rsx! {
        div {
            class: "screen",
            h2 { class: "m-0 mb-2 font-semibold text-neutral-800 text-lg", "{title}" }
            if !description.is_empty() {
                p { class: "m-0 text-sm text-neutral-600", "{description}" }
            }
        }
    }
}
