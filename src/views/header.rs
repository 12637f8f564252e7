// ============================================================================
// HEADER VIEW - Nodos de login/logout/bienvenida en `.nav-actions`
// ============================================================================

use std::rc::Rc;

use web_sys::{Element, Node};

use crate::dom::{get_element_by_id, on_click_prevent_default, query_selector, set_display, set_text_content, ElementBuilder};
use crate::error::HeaderError;
use crate::utils::{
    DISPLAY_HIDDEN, DISPLAY_VISIBLE, LOGIN_LINK_ID, LOGOUT_BUTTON_CLASS, LOGOUT_BUTTON_ID, LOGOUT_LABEL,
    NAV_ACTIONS_SELECTOR, WELCOME_MESSAGE_CLASS, WELCOME_MESSAGE_ID,
};

/// Acción ejecutada al pulsar "Logout"
pub type LogoutHandler = Rc<dyn Fn()>;

/// Superficie del header sobre la que se aplica un `HeaderView`.
/// Los setters de visibilidad no hacen nada si el nodo no existe.
pub trait HeaderSurface {
    fn set_login_link_visible(&self, visible: bool) -> Result<(), HeaderError>;

    fn has_logout_button(&self) -> bool;
    /// Crea el botón visible y le asocia `on_logout`
    fn create_logout_button(&self, on_logout: LogoutHandler) -> Result<(), HeaderError>;
    fn set_logout_button_visible(&self, visible: bool) -> Result<(), HeaderError>;

    fn has_welcome_message(&self) -> bool;
    /// Inserta el mensaje justo antes del link de login (o del botón de logout)
    fn create_welcome_message(&self) -> Result<(), HeaderError>;
    /// `Some(texto)` lo muestra con ese texto, `None` lo oculta
    fn set_welcome_message(&self, text: Option<&str>) -> Result<(), HeaderError>;
}

fn display_for(visible: bool) -> &'static str {
    if visible {
        DISPLAY_VISIBLE
    } else {
        DISPLAY_HIDDEN
    }
}

/// Header real del documento. Sin estado: cada operación busca los nodos por ID.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomHeader;

impl DomHeader {
    fn nav_actions(&self) -> Result<Element, HeaderError> {
        query_selector(NAV_ACTIONS_SELECTOR)?.ok_or(HeaderError::MissingNavActions)
    }
}

impl HeaderSurface for DomHeader {
    fn set_login_link_visible(&self, visible: bool) -> Result<(), HeaderError> {
        if let Some(link) = get_element_by_id(LOGIN_LINK_ID) {
            set_display(&link, display_for(visible))?;
        }
        Ok(())
    }

    fn has_logout_button(&self) -> bool {
        get_element_by_id(LOGOUT_BUTTON_ID).is_some()
    }

    fn create_logout_button(&self, on_logout: LogoutHandler) -> Result<(), HeaderError> {
        let nav_actions = self.nav_actions()?;
        let button = ElementBuilder::new("a")?
            .id(LOGOUT_BUTTON_ID)?
            .class(LOGOUT_BUTTON_CLASS)
            .attr("href", "#")?
            .text(LOGOUT_LABEL)
            .display(DISPLAY_VISIBLE)?
            .build();
        on_click_prevent_default(&button, move || on_logout())?;
        nav_actions.append_child(&button)?;
        log::debug!("🔘 [HEADER] Botón de logout creado");
        Ok(())
    }

    fn set_logout_button_visible(&self, visible: bool) -> Result<(), HeaderError> {
        if let Some(button) = get_element_by_id(LOGOUT_BUTTON_ID) {
            set_display(&button, display_for(visible))?;
        }
        Ok(())
    }

    fn has_welcome_message(&self) -> bool {
        get_element_by_id(WELCOME_MESSAGE_ID).is_some()
    }

    fn create_welcome_message(&self) -> Result<(), HeaderError> {
        let nav_actions = self.nav_actions()?;
        let message = ElementBuilder::new("span")?
            .id(WELCOME_MESSAGE_ID)?
            .class(WELCOME_MESSAGE_CLASS)
            .build();
        let anchor = get_element_by_id(LOGIN_LINK_ID).or_else(|| get_element_by_id(LOGOUT_BUTTON_ID));
        // insertBefore con un nodo que no es hijo directo lanza; en ese caso se añade al final
        match anchor.filter(|node| node.parent_element().as_ref() == Some(&nav_actions)) {
            Some(node) => {
                let reference: &Node = &node;
                nav_actions.insert_before(&message, Some(reference))?
            }
            None => nav_actions.append_child(&message)?,
        };
        Ok(())
    }

    fn set_welcome_message(&self, text: Option<&str>) -> Result<(), HeaderError> {
        let Some(message) = get_element_by_id(WELCOME_MESSAGE_ID) else {
            return Ok(());
        };
        match text {
            Some(text) => {
                set_text_content(&message, text);
                set_display(&message, DISPLAY_VISIBLE)?;
            }
            None => set_display(&message, DISPLAY_HIDDEN)?,
        }
        Ok(())
    }
}
