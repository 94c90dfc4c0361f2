//! Area screens. Each renders a heading inside the protected layout.

use dioxus::prelude::*;
use ui::{use_auth, ChangePasswordForm, ScreenPlaceholder};

#[component]
pub fn SuperAdminDashboard() -> Element {
    rsx! { ScreenPlaceholder { title: "Platform Overview", description: "Organizations, users and activity across the platform." } }
}

#[component]
pub fn Organizations() -> Element {
    rsx! { ScreenPlaceholder { title: "Organizations" } }
}

#[component]
pub fn GlobalUsers() -> Element {
    rsx! { ScreenPlaceholder { title: "Global Users" } }
}

#[component]
pub fn PlatformSettings() -> Element {
    rsx! { ScreenPlaceholder { title: "Settings" } }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! { ScreenPlaceholder { title: "Dashboard", description: "Sites, staff and reports of your organization." } }
}

#[component]
pub fn Sites() -> Element {
    rsx! { ScreenPlaceholder { title: "Sites" } }
}

#[component]
pub fn SubAdmins() -> Element {
    rsx! { ScreenPlaceholder { title: "Sub Admins" } }
}

#[component]
pub fn Supervisors() -> Element {
    rsx! { ScreenPlaceholder { title: "Supervisors" } }
}

#[component]
pub fn Clients() -> Element {
    rsx! { ScreenPlaceholder { title: "Clients" } }
}

#[component]
pub fn AdminReports() -> Element {
    rsx! { ScreenPlaceholder { title: "Reports" } }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! { ScreenPlaceholder { title: "Users" } }
}

#[component]
pub fn SupervisorDashboard() -> Element {
    rsx! { ScreenPlaceholder { title: "Dashboard", description: "Today's attendance, tasks and reports for your sites." } }
}

#[component]
pub fn Attendance() -> Element {
    rsx! { ScreenPlaceholder { title: "Attendance" } }
}

#[component]
pub fn DailyReports() -> Element {
    rsx! { ScreenPlaceholder { title: "Daily Reports" } }
}

#[component]
pub fn Resources() -> Element {
    rsx! { ScreenPlaceholder { title: "Resources" } }
}

#[component]
pub fn SupervisorReports() -> Element {
    rsx! { ScreenPlaceholder { title: "My Reports" } }
}

#[component]
pub fn SupervisorTasks() -> Element {
    rsx! { ScreenPlaceholder { title: "My Tasks" } }
}

#[component]
pub fn SubAdminDashboard() -> Element {
    rsx! { ScreenPlaceholder { title: "Dashboard" } }
}

#[component]
pub fn SubAdminReports() -> Element {
    rsx! { ScreenPlaceholder { title: "Reports" } }
}

#[component]
pub fn ClientDashboard() -> Element {
    rsx! { ScreenPlaceholder { title: "Dashboard", description: "Progress of your projects." } }
}

#[component]
pub fn ClientSites() -> Element {
    rsx! { ScreenPlaceholder { title: "My Projects" } }
}

#[component]
pub fn ClientReports() -> Element {
    rsx! { ScreenPlaceholder { title: "Reports" } }
}

/// Profile summary and password change, open to every signed-in user.
#[component]
pub fn Account() -> Element {
    let auth = use_auth();
    let Some(user) = auth().user else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "screen",
            h2 { class: "m-0 mb-4 font-semibold text-neutral-800 text-lg", "Account" }
            dl {
                class: "account-details",
                dt { "Name" }
                dd { "{user.display_name()}" }
                dt { "Email" }
                dd { "{user.email}" }
                dt { "Role" }
                dd {
                    match user.role {
                        Some(role) => rsx! { "{role.label()}" },
                        None => rsx! { "No role assigned" },
                    }
                }
                if let Some(ref phone) = user.phone {
                    dt { "Phone" }
                    dd { "{phone}" }
                }
            }
            ChangePasswordForm {}
        }
    }
}
