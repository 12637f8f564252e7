// ============================================================================
// HEADER AUTH CONTROLLER - Sincroniza el header con la sesión y gestiona
// login/logout
// ============================================================================
// LoggedOut -> LoggedIn: envío del formulario con credenciales válidas
// LoggedIn -> LoggedOut: click en "Logout"
// El estado inicial se lee del almacén al cargar la página.
// ============================================================================

use std::rc::Rc;

use crate::config::AppConfig;
use crate::error::{AuthError, HeaderError};
use crate::models::Credentials;
use crate::services::{Authenticator, Navigator, Notifier};
use crate::state::AuthSession;
use crate::utils::{KeyValueStore, IS_LOGGED_IN_KEY, USER_EMAIL_KEY};
use crate::viewmodels::HeaderView;
use crate::views::{HeaderSurface, LogoutHandler};

/// Colaboradores inyectados; todos `Rc` para poder clonar el controlador
/// dentro de los closures de eventos.
#[derive(Clone)]
pub struct HeaderAuthController {
    store: Rc<dyn KeyValueStore>,
    surface: Rc<dyn HeaderSurface>,
    navigator: Rc<dyn Navigator>,
    notifier: Rc<dyn Notifier>,
    authenticator: Rc<dyn Authenticator>,
    config: Rc<AppConfig>,
}

impl HeaderAuthController {
    pub fn new(
        store: Rc<dyn KeyValueStore>,
        surface: Rc<dyn HeaderSurface>,
        navigator: Rc<dyn Navigator>,
        notifier: Rc<dyn Notifier>,
        authenticator: Rc<dyn Authenticator>,
        config: AppConfig,
    ) -> Self {
        Self {
            store,
            surface,
            navigator,
            notifier,
            authenticator,
            config: Rc::new(config),
        }
    }

    /// Sesión actual según el almacén
    pub fn session(&self) -> Result<AuthSession, HeaderError> {
        Ok(AuthSession::load(self.store.as_ref())?)
    }

    /// Recalcular y aplicar la visibilidad del header
    pub fn refresh_header(&self) -> Result<(), HeaderError> {
        let session = self.session()?;
        let view = HeaderView::from_session(&session, &self.config);
        log::debug!("🔄 [HEADER] Refrescando header (logged_in={})", session.logged_in);

        let controller = self.clone();
        view.apply(self.surface.as_ref(), move || {
            let handler: LogoutHandler = Rc::new(move || {
                if let Err(e) = controller.logout() {
                    log::error!("❌ [HEADER] Error en logout: {}", e);
                }
            });
            handler
        })
    }

    /// Click en "Logout": borrar sesión, refrescar y volver al inicio
    pub fn logout(&self) -> Result<(), HeaderError> {
        log::info!("👋 [AUTH] Logout");
        AuthSession::clear(self.store.as_ref())?;
        self.refresh_header()?;
        self.navigator.navigate(&self.config.home_page)
    }

    /// Envío del formulario de login. Con credenciales incorrectas se
    /// notifica al usuario y el almacén no se toca.
    pub fn handle_login_submit(&self, email: &str, password: &str) -> Result<AuthSession, AuthError> {
        let credentials = Credentials::new(email, password);

        if let Err(e) = self.authenticator.verify(&credentials) {
            let message = match e {
                AuthError::MissingFields => &self.config.messages.missing_fields,
                _ => &self.config.messages.login_failure,
            };
            self.notifier.notify(message);
            return Err(e);
        }

        let session = AuthSession::logged_in(&credentials.email);
        session.save(self.store.as_ref())?;
        log::info!("✅ [AUTH] Login correcto: {}", credentials.email);

        self.notifier.notify(&self.config.messages.login_success);
        if let Err(e) = self.navigator.navigate(&self.config.home_page) {
            log::error!("❌ [AUTH] Error redirigiendo tras login: {}", e);
        }
        Ok(session)
    }

    /// Evento `storage` de otra pestaña. `None` = `localStorage.clear()`.
    /// Devuelve `true` si se refrescó el header.
    pub fn handle_storage_change(&self, key: Option<&str>) -> Result<bool, HeaderError> {
        match key {
            None | Some(IS_LOGGED_IN_KEY) | Some(USER_EMAIL_KEY) => {
                self.refresh_header()?;
                Ok(true)
            }
            Some(_) => Ok(false),
        }
    }
}
