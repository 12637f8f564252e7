// ============================================================================
// EVENT HANDLING - Sistema de eventos
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners en elementos del DOM: el navegador los limpia al destruir el
//   elemento, así que closure.forget() es seguro.
// - Listeners globales (window/document): registrar UNA SOLA VEZ, con flag
//   de protección (ver register_window_listener_once).
// ============================================================================

use std::cell::RefCell;
use std::collections::HashSet;

use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent, StorageEvent};

thread_local! {
    static WINDOW_LISTENERS: RefCell<HashSet<&'static str>> = RefCell::new(HashSet::new());
}

/// Click handler que cancela la navegación por defecto (p.ej. `href="#"`)
pub fn on_click_prevent_default<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
        event.prevent_default();
        handler();
    }) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // Nota: closure.forget() es necesario para mantener el closure vivo en Rust WASM
    closure.forget();
    Ok(())
}

/// Submit handler que cancela el envío por defecto del formulario
pub fn on_submit_prevent_default<F>(element: &Element, mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let closure = Closure::wrap(Box::new(move |event: Event| {
        event.prevent_default();
        handler();
    }) as Box<dyn FnMut(Event)>);
    element.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Registrar un listener en `document` o `window` una sola vez por tipo de evento.
/// Devuelve `false` si ya estaba registrado.
fn register_once<F>(event_type: &'static str, target: &web_sys::EventTarget, handler: F) -> Result<bool, JsValue>
where
    F: FnMut(Event) + 'static,
{
    let first = WINDOW_LISTENERS.with(|set| set.borrow_mut().insert(event_type));
    if !first {
        log::warn!("⚠️ Listener '{}' ya registrado, ignorando llamada duplicada", event_type);
        return Ok(false);
    }
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(true)
}

/// `document.readyState` distinto de "loading": DOMContentLoaded ya pasó
pub fn is_dom_ready(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Ejecutar `handler` cuando el DOM esté listo (inmediatamente si ya cargó)
pub fn on_dom_ready<F>(mut handler: F) -> Result<(), JsValue>
where
    F: FnMut() + 'static,
{
    let document = crate::dom::document().ok_or_else(|| JsValue::from_str("No document"))?;
    if is_dom_ready(&document.ready_state()) {
        handler();
        return Ok(());
    }
    register_once("DOMContentLoaded", &document, move |_e: Event| handler())?;
    Ok(())
}

/// Escuchar cambios de localStorage hechos desde otras pestañas.
/// El handler recibe la clave modificada (`None` si se llamó `clear()`).
pub fn on_storage_change<F>(mut handler: F) -> Result<bool, JsValue>
where
    F: FnMut(Option<String>) + 'static,
{
    let window = crate::dom::window().ok_or_else(|| JsValue::from_str("No window"))?;
    register_once("storage", &window, move |e: Event| {
        if let Some(storage_event) = e.dyn_ref::<StorageEvent>() {
            handler(storage_event.key());
        }
    })
}
