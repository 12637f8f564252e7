pub mod header;
pub mod login_form;

pub use header::{DomHeader, HeaderSurface, LogoutHandler};
pub use login_form::bind_login_form;
