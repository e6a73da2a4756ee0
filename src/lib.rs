// ============================================================================
// VITRINE SPA - Loja de demonstração em Rust puro (WASM)
// ============================================================================
// - Router: tabela de rotas, resolução, histórico, scroll e carga de views
// - Views: funções que devolvem HTML (sem lógica de navegação)
// - DOM: ponte com o navegador (ponto de montagem, History API, eventos)
// - App: casca que monta tudo uma única vez em #app
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod router;
mod routes;
mod utils;
mod views;

#[cfg(test)]
mod testing;

pub use app::App;
pub use config::{AppConfig, RouterConfig, CONFIG};
pub use dom::{HostDocument, MountPoint};
pub use error::AppError;
pub use models::{Route, RouteMatch, RouteMeta, RouteTarget, ViewKey};
pub use router::{
    History, MemoryHistory, Navigation, NavigationKind, NavigationTarget, Resolution, RouteTable,
    Router, RouterError, RouterState, ScrollPosition, Viewport,
};

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::dom::BrowserDocument;

// Mantém a App viva durante todo o processo; ninguém a consulta daqui
thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Vitrine SPA - Rust Puro");

    let document = BrowserDocument::new()?;
    let app = App::mount(&document, &CONFIG)?;

    // Os listeners recebem o roteador explicitamente
    dom::on_popstate(document.window(), app.router().clone())?;
    app.mount_point().forward_link_clicks(app.router().clone())?;

    let router = app.router().clone();
    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    spawn_local(async move {
        match router.start().await {
            Ok(nav) => log::info!("✅ [APP] Primeira view: {}", nav.route.full_path()),
            Err(e) => log::error!("❌ [APP] Falha na navegação inicial: {}", e),
        }
    });

    Ok(())
}
