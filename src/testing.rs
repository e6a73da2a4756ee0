// Dublês do host usados pelos testes

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::dom::{HostDocument, MountPoint};
use crate::error::AppError;
use crate::models::ViewKey;
use crate::router::{History, MemoryHistory, Router, ScrollPosition, ViewLoader, ViewModule, Viewport};

#[derive(Default)]
pub struct MemoryViewport {
    offset: Cell<ScrollPosition>,
    scroll_calls: Cell<usize>,
}

impl MemoryViewport {
    pub fn user_scrolls(&self, top: f64) {
        self.offset.set(ScrollPosition::new(0.0, top));
    }

    pub fn scroll_calls(&self) -> usize {
        self.scroll_calls.get()
    }
}

impl Viewport for MemoryViewport {
    fn offset(&self) -> ScrollPosition {
        self.offset.get()
    }

    fn scroll_to(&self, position: ScrollPosition) {
        self.offset.set(position);
        self.scroll_calls.set(self.scroll_calls.get() + 1);
    }
}

#[derive(Default)]
pub struct MemoryMountPoint {
    renders: RefCell<Vec<String>>,
    links: RefCell<Option<Router>>,
}

impl MemoryMountPoint {
    pub fn renders(&self) -> Vec<String> {
        self.renders.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.renders.borrow().last().cloned()
    }

    pub fn forwards_links(&self) -> bool {
        self.links.borrow().is_some()
    }
}

impl MountPoint for MemoryMountPoint {
    fn replace_content(&self, html: &str) {
        self.renders.borrow_mut().push(html.to_string());
    }

    fn forward_link_clicks(&self, router: Router) -> Result<(), JsValue> {
        *self.links.borrow_mut() = Some(router);
        Ok(())
    }
}

pub struct MemoryDocument {
    pub anchor_id: Option<String>,
    pub mount: Rc<MemoryMountPoint>,
    pub history: Rc<MemoryHistory>,
    pub viewport: Rc<MemoryViewport>,
    scroll_taken: Cell<bool>,
}

impl MemoryDocument {
    pub fn new(anchor_id: Option<&str>, initial: &str) -> Self {
        Self {
            anchor_id: anchor_id.map(str::to_string),
            mount: Rc::new(MemoryMountPoint::default()),
            history: Rc::new(MemoryHistory::new(initial)),
            viewport: Rc::new(MemoryViewport::default()),
            scroll_taken: Cell::new(false),
        }
    }

    pub fn scroll_taken(&self) -> bool {
        self.scroll_taken.get()
    }
}

impl HostDocument for MemoryDocument {
    fn mount_point(&self, id: &str) -> Option<Rc<dyn MountPoint>> {
        match &self.anchor_id {
            Some(anchor) if anchor == id => Some(self.mount.clone()),
            _ => None,
        }
    }

    fn history(&self) -> Rc<dyn History> {
        self.history.clone()
    }

    fn viewport(&self) -> Rc<dyn Viewport> {
        self.viewport.clone()
    }

    fn take_scroll_control(&self) -> Result<(), AppError> {
        self.scroll_taken.set(true);
        Ok(())
    }
}

/// Carregador com views triviais que renderizam o próprio nome
pub fn test_loader() -> ViewLoader {
    let mut loader = ViewLoader::new();
    for key in [
        ViewKey::LayoutResponsivo,
        ViewKey::Roteamento,
        ViewKey::MenuLateral,
        ViewKey::Checkout,
        ViewKey::NaoEncontrada,
    ] {
        loader.register(key, move || async move {
            Ok(ViewModule::new(key, move |route| format!("{}:{}", key, route.path)))
        });
    }
    loader
}
