mod login;
pub use login::{Login, Unauthorized};

mod layout;
pub use layout::{AppShell, ProtectedLayout};

mod screens;
pub use screens::*;
