use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::router::{RouteTableError, RouterError};

/// Erros de inicialização da aplicação. Todos são fatais.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("ponto de montagem #{0} não encontrado no documento")]
    MissingMountPoint(String),

    #[error("tabela de rotas inválida: {0}")]
    RouteTable(#[from] RouteTableError),

    #[error(transparent)]
    Router(#[from] RouterError),

    #[error("API do host indisponível: {0}")]
    Host(String),
}

impl From<AppError> for JsValue {
    fn from(err: AppError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
