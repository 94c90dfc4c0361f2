use api::User;
use dioxus::prelude::*;
use session::{nav_items, NavIcon, NavItem};

use crate::icons::*;
use crate::{Icon, LogoutButton};

/// Role-driven navigation sidebar.
///
/// The entries come from the signed-in user's role; a user without a role
/// gets the header and the sign-out button only.
#[component]
pub fn AppSidebar(
    user: Option<User>,
    current_path: String,
    on_navigate: EventHandler<String>,
    on_logout: EventHandler<()>,
) -> Element {
    let items = nav_items(user.as_ref().and_then(|u| u.role));

    rsx! {
        aside {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                h1 { "SiteManager" }
                p { "Construction Platform" }
            }

            nav {
                class: "sidebar-nav",
                for item in items.iter().copied() {
                    NavEntry {
                        key: "{item.path}",
                        item: item,
                        active: item.is_active(&current_path),
                        on_navigate: on_navigate,
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                if let Some(ref u) = user {
                    div {
                        class: "sidebar-user",
                        div { class: "sidebar-user-avatar", "{u.initial()}" }
                        div {
                            class: "sidebar-user-text",
                            p { class: "sidebar-user-name", "{u.display_name()}" }
                            if let Some(role) = u.role {
                                p { class: "sidebar-user-role", "{role.label()}" }
                            }
                        }
                    }
                }
                LogoutButton {
                    class: "sidebar-logout",
                    on_logout: on_logout,
                }
            }
        }
    }
}

#[component]
fn NavEntry(item: NavItem, active: bool, on_navigate: EventHandler<String>) -> Element {
    rsx! {
        button {
            class: if active { "nav-item active" } else { "nav-item" },
            onclick: move |_| on_navigate.call(item.path.to_string()),
            NavGlyph { icon: item.icon }
            span { "{item.label}" }
        }
    }
}

#[component]
fn NavGlyph(icon: NavIcon) -> Element {
    match icon {
        NavIcon::ChartBar => rsx! { Icon { icon: FaChartBar, width: 16, height: 16 } },
        NavIcon::Building => rsx! { Icon { icon: FaBuilding, width: 16, height: 16 } },
        NavIcon::Users => rsx! { Icon { icon: FaUsers, width: 16, height: 16 } },
        NavIcon::MapMarked => rsx! { Icon { icon: FaMapLocationDot, width: 16, height: 16 } },
        NavIcon::HardHat => rsx! { Icon { icon: FaHelmetSafety, width: 16, height: 16 } },
        NavIcon::FileAlt => rsx! { Icon { icon: FaFileLines, width: 16, height: 16 } },
        NavIcon::ClipboardList => rsx! { Icon { icon: FaClipboardList, width: 16, height: 16 } },
        NavIcon::Clock => rsx! { Icon { icon: FaClock, width: 16, height: 16 } },
        NavIcon::Tasks => rsx! { Icon { icon: FaListCheck, width: 16, height: 16 } },
        NavIcon::Cog => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
        NavIcon::UserTie => rsx! { Icon { icon: FaUserTie, width: 16, height: 16 } },
    }
}
