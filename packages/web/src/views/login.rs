//! Login page and the unauthorized landing page.

use api::User;
use dioxus::prelude::*;
use ui::{use_auth, LoginForm, UnauthorizedView};

use crate::{home_route, Route};

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let state = auth();

    // If already logged in, go to the role's dashboard
    if !state.loading && state.is_authenticated() {
        nav.replace(home_route(state.role()));
    }

    rsx! {
        div {
            class: "login-container",
            style: "display: flex; flex-direction: column; align-items: center; justify-content: center; min-height: 100vh; padding: 2rem;",

            h1 {
                style: "margin-bottom: 0.5rem; color: #2563eb; font-weight: 700; font-size: 1.75rem;",
                "SiteManager"
            }

            p {
                style: "margin-bottom: 2rem; color: #6b7280; font-size: 0.9375rem;",
                "Sign in to your account"
            }

            div {
                style: "width: 100%; max-width: 320px;",
                LoginForm {
                    on_success: move |user: User| {
                        tracing::info!("Signed in as {}", user.email);
                        nav.replace(home_route(user.role));
                    },
                }
            }
        }

        style {
            r#"
            .login-form {{
                display: flex;
                flex-direction: column;
                gap: 0.5rem;
            }}

            .login-form input {{
                padding: 0.5rem 0.75rem;
                border: 1px solid #d1d5db;
                border-radius: 4px;
            }}

            .login-btn {{
                margin-top: 1rem;
                padding: 0.625rem 1.25rem;
                border: none;
                border-radius: 4px;
                background-color: #2563eb;
                color: white;
                font-weight: 500;
                cursor: pointer;
            }}

            .login-btn:disabled {{
                opacity: 0.5;
                cursor: not-allowed;
            }}

            .login-error {{
                padding: 0.5rem 0.75rem;
                border-radius: 4px;
                background: #fef2f2;
                color: #dc2626;
                font-size: 0.875rem;
            }}
            "#
        }
    }
}

#[component]
pub fn Unauthorized() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        UnauthorizedView {
            on_back: move |_| {
                let state = auth();
                if state.is_authenticated() {
                    nav.replace(home_route(state.role()));
                } else {
                    nav.replace(Route::Login {});
                }
            },
        }
    }
}
