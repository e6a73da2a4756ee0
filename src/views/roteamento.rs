// ============================================================================
// ROTEAMENTO - Vitrine filtrada pela categoria da rota
// ============================================================================

use crate::models::{Catalogo, RouteMatch};
use crate::views::{escape_html, render_produto_card};

/// Abas de categoria: (caminho, rótulo, valor do metadado `categoria`)
const ABAS: [(&str, &str, &str); 6] = [
    ("/roteamento", "Todas", "todas"),
    ("/roteamento/camisetas", "Camisetas", "camiseta"),
    ("/roteamento/bermudas", "Bermudas", "bermuda"),
    ("/roteamento/bolsas", "Bolsas", "bolsa"),
    ("/roteamento/pochetes", "Pochetes", "pochete"),
    ("/roteamento/moletons", "Moletons", "moletom"),
];

pub fn render_roteamento(catalogo: &Catalogo, route: &RouteMatch) -> String {
    let categoria = route.categoria().unwrap_or("todas");

    let abas: String = ABAS
        .iter()
        .map(|(href, rotulo, slug)| {
            let class = if *slug == categoria { "aba ativa" } else { "aba" };
            format!(r#"<a href="{}" class="{}" data-link>{}</a>"#, href, class, rotulo)
        })
        .collect();

    let produtos = catalogo.filtrar(Some(categoria));
    let cards: String = if produtos.is_empty() {
        r#"<p class="vazio">Nenhum produto nesta categoria.</p>"#.to_string()
    } else {
        produtos.into_iter().map(render_produto_card).collect()
    };

    format!(
        r#"<section class="roteamento" data-categoria="{}"><nav class="abas">{}</nav><div class="grid-produtos">{}</div></section>"#,
        escape_html(categoria),
        abas,
        cards
    )
}
