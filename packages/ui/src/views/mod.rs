mod account;
pub use account::ChangePasswordForm;

mod placeholders;
pub use placeholders::{LoadingPlaceholder, ScreenPlaceholder, UnauthorizedView};
