// ============================================================================
// BROWSER - Implementações do host sobre web_sys
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, ScrollRestoration, Window};

use crate::dom::events::on_link_click;
use crate::dom::host::{HostDocument, MountPoint};
use crate::error::AppError;
use crate::router::{History, HistoryState, Router, RouterError, ScrollPosition, Viewport};

pub struct ElementMountPoint {
    element: Element,
}

impl MountPoint for ElementMountPoint {
    fn replace_content(&self, html: &str) {
        self.element.set_inner_html(html);
    }

    fn forward_link_clicks(&self, router: Router) -> Result<(), JsValue> {
        on_link_click(&self.element, router)
    }
}

pub struct WindowViewport {
    window: Window,
}

impl Viewport for WindowViewport {
    fn offset(&self) -> ScrollPosition {
        ScrollPosition::new(
            self.window.scroll_x().unwrap_or(0.0),
            self.window.scroll_y().unwrap_or(0.0),
        )
    }

    fn scroll_to(&self, position: ScrollPosition) {
        self.window.scroll_to_with_x_and_y(position.left, position.top);
    }
}

/// History API do navegador. Cada entrada criada pelo roteador guarda
/// `{position}` no state, que sobrevive a um reload da mesma entrada.
pub struct WebHistory {
    window: Window,
    history: web_sys::History,
}

impl WebHistory {
    fn state_for(position: usize) -> Result<JsValue, RouterError> {
        serde_wasm_bindgen::to_value(&HistoryState { position })
            .map_err(|e| RouterError::History(e.to_string()))
    }
}

/// Posição gravada no state de uma entrada. Entradas que o navegador
/// empilhou sozinho (hash) não têm state e devolvem `None`.
pub fn history_position(state: JsValue) -> Option<usize> {
    if state.is_null() || state.is_undefined() {
        return None;
    }
    serde_wasm_bindgen::from_value::<HistoryState>(state)
        .ok()
        .map(|s| s.position)
}

fn js_error(err: JsValue) -> RouterError {
    RouterError::History(format!("{:?}", err))
}

impl History for WebHistory {
    fn location(&self) -> String {
        let location = self.window.location();
        format!(
            "{}{}{}",
            location.pathname().unwrap_or_else(|_| "/".to_string()),
            location.search().unwrap_or_default(),
            location.hash().unwrap_or_default()
        )
    }

    fn position(&self) -> Option<usize> {
        self.history.state().ok().and_then(history_position)
    }

    fn push(&self, location: &str, position: usize) -> Result<(), RouterError> {
        self.history
            .push_state_with_url(&Self::state_for(position)?, "", Some(location))
            .map_err(js_error)
    }

    fn replace(&self, location: &str, position: usize) -> Result<(), RouterError> {
        self.history
            .replace_state_with_url(&Self::state_for(position)?, "", Some(location))
            .map_err(js_error)
    }
}

pub struct BrowserDocument {
    window: Window,
    document: Document,
    history: Rc<WebHistory>,
    viewport: Rc<WindowViewport>,
}

impl BrowserDocument {
    /// Só lê handles do navegador; nada é alterado até a montagem
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let document = window.document().ok_or_else(|| JsValue::from_str("No document"))?;
        let history = window.history()?;
        Ok(Self {
            document,
            history: Rc::new(WebHistory {
                window: window.clone(),
                history,
            }),
            viewport: Rc::new(WindowViewport {
                window: window.clone(),
            }),
            window,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl HostDocument for BrowserDocument {
    fn mount_point(&self, id: &str) -> Option<Rc<dyn MountPoint>> {
        let element = self.document.get_element_by_id(id)?;
        Some(Rc::new(ElementMountPoint { element }))
    }

    fn history(&self) -> Rc<dyn History> {
        self.history.clone()
    }

    fn viewport(&self) -> Rc<dyn Viewport> {
        self.viewport.clone()
    }

    fn take_scroll_control(&self) -> Result<(), AppError> {
        self.history
            .history
            .set_scroll_restoration(ScrollRestoration::Manual)
            .map_err(|e| AppError::Host(format!("{:?}", e)))
    }
}
