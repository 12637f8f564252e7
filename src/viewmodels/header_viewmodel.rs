// ============================================================================
// HEADER VIEWMODEL - Qué debe mostrar el header según la sesión
// ============================================================================
// Render declarativo: se calcula un HeaderView a partir de AuthSession y se
// aplica sobre cualquier HeaderSurface. Aplicarlo dos veces no cambia nada.
// ============================================================================

use crate::config::AppConfig;
use crate::error::HeaderError;
use crate::state::AuthSession;
use crate::views::header::{HeaderSurface, LogoutHandler};

#[derive(Clone, Debug, PartialEq)]
pub struct HeaderView {
    pub login_link_visible: bool,
    pub logout_button_visible: bool,
    pub welcome_text: Option<String>,
}

impl HeaderView {
    pub fn from_session(session: &AuthSession, config: &AppConfig) -> Self {
        Self {
            login_link_visible: !session.logged_in,
            logout_button_visible: session.logged_in,
            welcome_text: session.display_email().map(|email| config.welcome_text(email)),
        }
    }

    /// Aplicar sobre el DOM. Los nodos de logout y bienvenida solo se crean
    /// con sesión iniciada; `make_logout_handler` se llama solo al crear el botón.
    pub fn apply<F>(&self, surface: &dyn HeaderSurface, make_logout_handler: F) -> Result<(), HeaderError>
    where
        F: FnOnce() -> LogoutHandler,
    {
        if !self.logout_button_visible {
            surface.set_login_link_visible(self.login_link_visible)?;
            surface.set_logout_button_visible(false)?;
            surface.set_welcome_message(None)?;
            return Ok(());
        }

        surface.set_login_link_visible(false)?;

        if surface.has_logout_button() {
            surface.set_logout_button_visible(true)?;
        } else {
            surface.create_logout_button(make_logout_handler())?;
        }

        if !surface.has_welcome_message() {
            surface.create_welcome_message()?;
        }
        surface.set_welcome_message(self.welcome_text.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logged_out_view() {
        let view = HeaderView::from_session(&AuthSession::default(), &AppConfig::default());
        assert_eq!(
            view,
            HeaderView {
                login_link_visible: true,
                logout_button_visible: false,
                welcome_text: None,
            }
        );
    }

    #[test]
    fn test_logged_in_view_with_email() {
        let session = AuthSession::logged_in("a@b.com");
        let view = HeaderView::from_session(&session, &AppConfig::default());
        assert!(!view.login_link_visible);
        assert!(view.logout_button_visible);
        assert_eq!(view.welcome_text.as_deref(), Some("Welcome a@b.com"));
    }

    #[test]
    fn test_logged_in_view_without_email_hides_welcome() {
        let session = AuthSession {
            logged_in: true,
            email: None,
        };
        let view = HeaderView::from_session(&session, &AppConfig::default());
        assert!(view.logout_button_visible);
        assert_eq!(view.welcome_text, None);
    }

    #[test]
    fn test_exactly_one_of_login_or_logout_visible() {
        for session in [AuthSession::default(), AuthSession::logged_in("a@b.com")] {
            let view = HeaderView::from_session(&session, &AppConfig::default());
            assert_ne!(view.login_link_visible, view.logout_button_visible);
        }
    }
}
