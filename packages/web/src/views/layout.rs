use dioxus::prelude::*;

use session::{guard_path, GuardOutcome};
use ui::{use_auth, use_session, AppSidebar, LoadingPlaceholder};

use crate::Route;

/// Outermost layout. Sends the user to `/login` whenever the backend rejects
/// the stored session.
#[component]
pub fn AppShell() -> Element {
    let session = use_session();
    let nav = use_navigator();

    use_hook(|| {
        let session = session.clone();
        spawn(async move {
            let mut events = session.backend().events().subscribe();
            while session.wait_for_invalidation(&mut events).await {
                tracing::info!("Session ended by the backend");
                nav.replace(Route::Login {});
            }
        });
    });

    rsx! {
        Outlet::<Route> {}
    }
}

/// Layout for every role-restricted screen: runs the guard for the current
/// path, then renders the sidebar shell around the screen.
#[component]
pub fn ProtectedLayout() -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();
    let current_path = route.to_string();
    let state = auth();

    let outcome = guard_path(&state, &current_path);
    if outcome == GuardOutcome::Loading {
        return rsx! { LoadingPlaceholder {} };
    }
    if let Some(target) = outcome.redirect_path() {
        tracing::debug!("{:?} may not open {}, going to {}", state.role(), current_path, target);
        let route = target.parse::<Route>().unwrap_or(Route::Login {});
        nav.replace(route);
        return rsx! {};
    }

    let on_navigate = move |path: String| match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => tracing::warn!("Bad navigation target {}: {}", path, e),
    };

    rsx! {
        div {
            class: "app-layout",
            AppSidebar {
                user: state.user.clone(),
                current_path: current_path.clone(),
                on_navigate: on_navigate,
                on_logout: move |_| {
                    nav.replace(Route::Login {});
                },
            }
            div {
                class: "app-main",
                header {
                    class: "app-header",
                    button {
                        class: "app-header-account",
                        onclick: move |_| {
                            nav.push(Route::Account {});
                        },
                        "Account"
                    }
                }
                main {
                    class: "app-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
