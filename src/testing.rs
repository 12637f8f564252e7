// Dobles de prueba para el header, la navegación y las notificaciones

use std::cell::RefCell;

use crate::error::HeaderError;
use crate::services::{Navigator, Notifier};
use crate::utils::{LOGIN_LINK_ID, LOGOUT_BUTTON_ID, WELCOME_MESSAGE_ID};
use crate::views::{HeaderSurface, LogoutHandler};

#[derive(Default)]
struct HeaderNodes {
    login_link: Option<bool>,
    logout_button: Option<bool>,
    welcome: Option<(bool, String)>,
    children: Vec<&'static str>,
    creations: usize,
}

/// `.nav-actions` en memoria: guarda visibilidad, orden de hijos y el handler de logout
pub struct FakeHeader {
    nav_actions: bool,
    nodes: RefCell<HeaderNodes>,
    logout_handler: RefCell<Option<LogoutHandler>>,
}

impl Default for FakeHeader {
    fn default() -> Self {
        Self {
            nav_actions: true,
            nodes: RefCell::new(HeaderNodes::default()),
            logout_handler: RefCell::new(None),
        }
    }
}

impl FakeHeader {
    pub fn with_login_link() -> Self {
        let header = Self::default();
        {
            let mut nodes = header.nodes.borrow_mut();
            nodes.login_link = Some(true);
            nodes.children.push(LOGIN_LINK_ID);
        }
        header
    }

    pub fn without_nav_actions() -> Self {
        Self {
            nav_actions: false,
            ..Self::with_login_link()
        }
    }

    pub fn login_link_visible(&self) -> Option<bool> {
        self.nodes.borrow().login_link
    }

    pub fn logout_button_visible(&self) -> Option<bool> {
        self.nodes.borrow().logout_button
    }

    pub fn welcome(&self) -> Option<(bool, String)> {
        self.nodes.borrow().welcome.clone()
    }

    pub fn children(&self) -> Vec<&'static str> {
        self.nodes.borrow().children.clone()
    }

    pub fn creations(&self) -> usize {
        self.nodes.borrow().creations
    }

    /// Simula el click en el botón de logout
    pub fn click_logout(&self) {
        let handler = self.logout_handler.borrow().clone();
        handler.expect("logout button was never created")();
    }

    fn require_nav_actions(&self) -> Result<(), HeaderError> {
        if self.nav_actions {
            Ok(())
        } else {
            Err(HeaderError::MissingNavActions)
        }
    }
}

impl HeaderSurface for FakeHeader {
    fn set_login_link_visible(&self, visible: bool) -> Result<(), HeaderError> {
        let mut nodes = self.nodes.borrow_mut();
        if nodes.login_link.is_some() {
            nodes.login_link = Some(visible);
        }
        Ok(())
    }

    fn has_logout_button(&self) -> bool {
        self.nodes.borrow().logout_button.is_some()
    }

    fn create_logout_button(&self, on_logout: LogoutHandler) -> Result<(), HeaderError> {
        self.require_nav_actions()?;
        let mut nodes = self.nodes.borrow_mut();
        nodes.logout_button = Some(true);
        nodes.children.push(LOGOUT_BUTTON_ID);
        nodes.creations += 1;
        *self.logout_handler.borrow_mut() = Some(on_logout);
        Ok(())
    }

    fn set_logout_button_visible(&self, visible: bool) -> Result<(), HeaderError> {
        let mut nodes = self.nodes.borrow_mut();
        if nodes.logout_button.is_some() {
            nodes.logout_button = Some(visible);
        }
        Ok(())
    }

    fn has_welcome_message(&self) -> bool {
        self.nodes.borrow().welcome.is_some()
    }

    fn create_welcome_message(&self) -> Result<(), HeaderError> {
        self.require_nav_actions()?;
        let mut nodes = self.nodes.borrow_mut();
        let anchor = if nodes.login_link.is_some() { LOGIN_LINK_ID } else { LOGOUT_BUTTON_ID };
        let position = nodes
            .children
            .iter()
            .position(|child| *child == anchor)
            .unwrap_or(nodes.children.len());
        nodes.children.insert(position, WELCOME_MESSAGE_ID);
        nodes.welcome = Some((false, String::new()));
        nodes.creations += 1;
        Ok(())
    }

    fn set_welcome_message(&self, text: Option<&str>) -> Result<(), HeaderError> {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(welcome) = nodes.welcome.as_mut() {
            match text {
                Some(text) => *welcome = (true, text.to_string()),
                None => welcome.0 = false,
            }
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, url: &str) -> Result<(), HeaderError> {
        self.visited.borrow_mut().push(url.to_string());
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
