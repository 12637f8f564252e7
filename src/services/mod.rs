pub mod auth_service;
pub mod navigation;

pub use auth_service::{Authenticator, StaticAuthenticator};
pub use navigation::{AlertNotifier, BrowserNavigator, Navigator, Notifier};
