use dioxus::prelude::*;

use crate::auth::use_session;

/// Change the signed-in user's password.
#[component]
pub fn ChangePasswordForm() -> Element {
    let session = use_session();
    let mut old_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut status = use_signal(|| Option::<Result<String, String>>::None);
    let mut saving = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = session.clone();
        async move {
            if new_password() != confirm() {
                status.set(Some(Err("New passwords do not match".to_string())));
                return;
            }
            saving.set(true);
            let result = session
                .backend()
                .change_password(&old_password(), &new_password())
                .await;
            match result {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                    status.set(Some(Ok("Password changed".to_string())));
                }
                Err(e) => {
                    tracing::warn!("Password change failed: {}", e);
                    status.set(Some(Err(crate::login_error_message(&e))));
                }
            }
            saving.set(false);
        }
    };

    rsx! {
        form {
            class: "account-form",
            onsubmit: onsubmit,

            match status() {
                Some(Ok(message)) => rsx! { div { class: "form-success", "{message}" } },
                Some(Err(message)) => rsx! { div { class: "form-error", role: "alert", "{message}" } },
                None => rsx! {},
            }

            label { r#for: "old-password", "Current password" }
            input {
                id: "old-password",
                r#type: "password",
                required: true,
                value: old_password(),
                oninput: move |evt: FormEvent| old_password.set(evt.value()),
            }

            label { r#for: "new-password", "New password" }
            input {
                id: "new-password",
                r#type: "password",
                required: true,
                value: new_password(),
                oninput: move |evt: FormEvent| new_password.set(evt.value()),
            }

            label { r#for: "confirm-password", "Confirm new password" }
            input {
                id: "confirm-password",
                r#type: "password",
                required: true,
                value: confirm(),
                oninput: move |evt: FormEvent| confirm.set(evt.value()),
            }

            button {
                r#type: "submit",
                class: "login-btn",
                disabled: saving(),
                if saving() { "Saving..." } else { "Change password" }
            }
        }
    }
}
