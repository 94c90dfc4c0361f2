//! Authentication context and hooks for the UI.

use api::{ApiClient, ApiError, User};
use dioxus::prelude::*;
use session::{AuthState, SessionManager};

/// Session manager used by the app: real backend, platform token store.
pub type AppSession = SessionManager<ApiClient>;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Get the shared session manager.
pub fn use_session() -> AppSession {
    use_context::<AppSession>()
}

/// Provider component that owns the session for everything below it.
///
/// Mirrors the manager's state into a `Signal<AuthState>` and runs the startup
/// session check once. Both tasks are scoped to this component and stop with it.
#[component]
pub fn AuthProvider(session: AppSession, children: Element) -> Element {
    let session = use_context_provider(|| session);
    let mut auth_state = use_signal(|| session.state());
    use_context_provider(|| auth_state);

    use_hook(|| {
        let session = session.clone();
        spawn(async move {
            let mut updates = session.subscribe();
            let current = updates.borrow_and_update().clone();
            auth_state.set(current);
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                auth_state.set(next);
            }
        });
    });

    use_hook(|| {
        let session = session.clone();
        spawn(async move {
            let state = session.restore_session().await;
            tracing::debug!("Session check finished, signed in: {}", state.is_authenticated());
        });
    });

    rsx! {
        {children}
    }
}

/// Message shown under the login form.
pub fn login_error_message(error: &ApiError) -> String {
    match error {
        ApiError::Unauthorized { message }
        | ApiError::Rejected { message }
        | ApiError::Status { message, .. }
            if !message.trim().is_empty() =>
        {
            message.clone()
        }
        ApiError::Network(_) | ApiError::Timeout(_) => {
            "Cannot reach the server. Check your connection.".to_string()
        }
        _ => "Login failed".to_string(),
    }
}

/// Email and password sign-in form.
#[component]
pub fn LoginForm(on_success: EventHandler<User>) -> Element {
    let session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        async move {
            if submitting() {
                return;
            }
            submitting.set(true);
            error.set(None);
            match session.login(email().trim(), &password()).await {
                Ok(user) => on_success.call(user),
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    error.set(Some(login_error_message(&e)));
                    submitting.set(false);
                }
            }
        }
    };

    rsx! {
        form {
            class: "login-form",
            onsubmit: onsubmit,

            if let Some(message) = error() {
                div { class: "login-error", role: "alert", "{message}" }
            }

            label { r#for: "login-email", "Email" }
            input {
                id: "login-email",
                r#type: "email",
                required: true,
                autocomplete: "username",
                value: email(),
                oninput: move |evt: FormEvent| email.set(evt.value()),
            }

            label { r#for: "login-password", "Password" }
            input {
                id: "login-password",
                r#type: "password",
                required: true,
                autocomplete: "current-password",
                value: password(),
                oninput: move |evt: FormEvent| password.set(evt.value()),
            }

            button {
                r#type: "submit",
                class: "login-btn",
                disabled: submitting(),
                if submitting() { "Signing in..." } else { "Sign In" }
            }
        }
    }
}

/// Button that ends the session, then hands control back to the caller.
#[component]
pub fn LogoutButton(
    on_logout: EventHandler<()>,
    #[props(default = "Sign Out".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| {
                session.logout();
                on_logout.call(());
            },
            crate::Icon { icon: crate::icons::FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_login_error_prefers_backend_message() {
        let err = ApiError::Unauthorized {
            message: "Invalid credentials".into(),
        };
        assert_eq!(login_error_message(&err), "Invalid credentials");
    }

    #[test]
    fn test_login_error_fallbacks() {
        let blank = ApiError::Rejected { message: " ".into() };
        assert_eq!(login_error_message(&blank), "Login failed");

        let offline = ApiError::Timeout(Duration::from_secs(30));
        assert_eq!(
            login_error_message(&offline),
            "Cannot reach the server. Check your connection."
        );
    }
}
