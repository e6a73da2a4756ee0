// ============================================================================
// VIEWS - Funções que renderizam HTML (sem lógica de navegação)
// ============================================================================

pub mod app;
pub mod layout_responsivo;
pub mod roteamento;
pub mod menu_lateral;
pub mod checkout;
pub mod nao_encontrada;

pub use app::{render_app, MenuLink};
pub use layout_responsivo::render_grid_produtos;
pub use roteamento::render_roteamento;
pub use menu_lateral::render_menu_lateral;
pub use checkout::render_checkout;
pub use nao_encontrada::render_nao_encontrada;

use crate::models::{Catalogo, Produto, ViewKey};
use crate::router::{LoadError, ViewLoader, ViewModule};

/// Carregador com todas as views da vitrine. As views de catálogo só
/// desserializam os produtos na primeira carga.
pub fn app_loader() -> ViewLoader {
    let mut loader = ViewLoader::new();

    loader.register(ViewKey::LayoutResponsivo, || async {
        let catalogo = carregar_catalogo(ViewKey::LayoutResponsivo)?;
        Ok::<_, LoadError>(ViewModule::new(ViewKey::LayoutResponsivo, move |_| {
            render_grid_produtos(&catalogo)
        }))
    });
    loader.register(ViewKey::Roteamento, || async {
        let catalogo = carregar_catalogo(ViewKey::Roteamento)?;
        Ok::<_, LoadError>(ViewModule::new(ViewKey::Roteamento, move |route| {
            render_roteamento(&catalogo, route)
        }))
    });
    loader.register(ViewKey::MenuLateral, || async {
        Ok(ViewModule::new(ViewKey::MenuLateral, |_| render_menu_lateral()))
    });
    loader.register(ViewKey::Checkout, || async {
        Ok(ViewModule::new(ViewKey::Checkout, |_| render_checkout()))
    });
    loader.register(ViewKey::NaoEncontrada, || async {
        Ok(ViewModule::new(ViewKey::NaoEncontrada, render_nao_encontrada))
    });

    loader
}

fn carregar_catalogo(view: ViewKey) -> Result<Catalogo, LoadError> {
    Catalogo::embutido().map_err(|e| LoadError::Failed {
        view,
        reason: e.to_string(),
    })
}

/// Card de produto compartilhado pelo grid e pela listagem por categoria
pub(crate) fn render_produto_card(produto: &Produto) -> String {
    format!(
        r#"<article class="produto-card" data-categoria="{}"><h3>{}</h3><span class="preco">{}</span></article>"#,
        produto.categoria.slug(),
        escape_html(&produto.nome),
        produto.preco_formatado()
    )
}

/// Escapa texto antes de ir para innerHTML
pub(crate) fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
