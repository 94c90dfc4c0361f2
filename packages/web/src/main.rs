use dioxus::prelude::*;

use api::{ApiClient, ApiError, UserRole};
use session::{home_path, SessionManager};
use ui::{AppSession, AuthProvider};
use views::*;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/unauthorized")]
        Unauthorized {},

        #[layout(ProtectedLayout)]
            #[route("/super-admin")]
            SuperAdminDashboard {},
            #[route("/super-admin/organizations")]
            Organizations {},
            #[route("/super-admin/users")]
            GlobalUsers {},
            #[route("/super-admin/settings")]
            PlatformSettings {},

            #[route("/admin")]
            AdminDashboard {},
            #[route("/admin/sites")]
            Sites {},
            #[route("/admin/sub-admins")]
            SubAdmins {},
            #[route("/admin/supervisors")]
            Supervisors {},
            #[route("/admin/clients")]
            Clients {},
            #[route("/admin/reports")]
            AdminReports {},
            #[route("/admin/users")]
            AdminUsers {},

            #[route("/supervisor")]
            SupervisorDashboard {},
            #[route("/supervisor/attendance")]
            Attendance {},
            #[route("/supervisor/daily-reports")]
            DailyReports {},
            #[route("/supervisor/resources")]
            Resources {},
            #[route("/supervisor/reports")]
            SupervisorReports {},
            #[route("/supervisor/tasks")]
            SupervisorTasks {},

            #[route("/sub-admin")]
            SubAdminDashboard {},
            #[route("/sub-admin/reports")]
            SubAdminReports {},

            #[route("/client")]
            ClientDashboard {},
            #[route("/client/sites")]
            ClientSites {},
            #[route("/client/reports")]
            ClientReports {},

            #[route("/account")]
            Account {},
        #[end_layout]
    #[end_layout]

    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

/// Where a user with `role` lands after signing in.
fn home_route(role: Option<UserRole>) -> Route {
    home_path(role)
        .and_then(|path| path.parse::<Route>().ok())
        .unwrap_or(Route::Account {})
}

fn main() {
    dioxus::launch(App);
}

fn build_session() -> Result<AppSession, ApiError> {
    let config = ui::load_client_config();
    tracing::info!("Using backend at {}", config.base_url);
    let client = ApiClient::new(config, ui::make_token_store())?;
    Ok(SessionManager::from_client(client))
}

#[component]
fn App() -> Element {
    let session = use_hook(build_session);

    match session {
        Ok(session) => rsx! {
            AuthProvider {
                session: session,
                Router::<Route> {}
            }
        },
        Err(e) => {
            tracing::error!("Cannot start: {}", e);
            rsx! {
                div {
                    class: "login-error",
                    role: "alert",
                    "SiteManager is misconfigured: {e}"
                }
            }
        }
    }
}

/// Redirect `/` to `/login`
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Login {});
    rsx! {}
}

/// Send unknown paths back to the entry point
#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("No route for /{}", segments.join("/"));
    nav.replace(Route::Root {});
    rsx! {}
}
