// ============================================================================
// ROUTES - Superfície de URLs da vitrine
// ============================================================================

use crate::models::{Route, ViewKey};
use crate::utils::constants::META_CATEGORIA;

/// Tabela de rotas da aplicação. `/` só encaminha para `landing`.
pub fn app_routes(landing: &str) -> Vec<Route> {
    let categoria = |path: &str, name: &str, slug: &str| {
        Route::view(path, ViewKey::Roteamento)
            .named(name)
            .with_meta(META_CATEGORIA, slug)
    };

    vec![
        Route::redirect("/", landing),
        Route::view("/layout-responsivo", ViewKey::LayoutResponsivo).named("LayoutResponsivo"),
        Route::view("/roteamento", ViewKey::Roteamento).with_children(vec![
            categoria("", "TodasCategorias", "todas"),
            categoria("camisetas", "Camisetas", "camiseta"),
            categoria("bermudas", "Bermudas", "bermuda"),
            categoria("bolsas", "Bolsas", "bolsa"),
            categoria("pochetes", "Pochetes", "pochete"),
            categoria("moletons", "Moletons", "moletom"),
        ]),
        Route::view("/menu-lateral", ViewKey::MenuLateral).named("MenuLateral"),
        Route::view("/checkout", ViewKey::Checkout).named("Checkout"),
        Route::view("/:caminho*", ViewKey::NaoEncontrada).named("NaoEncontrada"),
    ]
}
