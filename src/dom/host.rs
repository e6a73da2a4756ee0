// ============================================================================
// HOST - O que a aplicação precisa do documento que a hospeda
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::error::AppError;
use crate::router::{History, Router, Viewport};

/// Elemento que recebe a árvore renderizada
pub trait MountPoint {
    fn replace_content(&self, html: &str);

    /// Encaminha ao roteador os cliques em links internos dentro do elemento
    fn forward_link_clicks(&self, router: Router) -> Result<(), JsValue>;
}

/// Documento hospedeiro: ponto de montagem, histórico e área rolável
pub trait HostDocument {
    fn mount_point(&self, id: &str) -> Option<Rc<dyn MountPoint>>;

    fn history(&self) -> Rc<dyn History>;

    fn viewport(&self) -> Rc<dyn Viewport>;

    /// Desliga a restauração de scroll do host; dali em diante quem decide
    /// é o roteador. Só chamado depois que o ponto de montagem existe.
    fn take_scroll_control(&self) -> Result<(), AppError>;
}
