// ============================================================================
// LAYOUT RESPONSIVO - Grid de produtos
// ============================================================================

use crate::models::Catalogo;
use crate::views::render_produto_card;

pub fn render_grid_produtos(catalogo: &Catalogo) -> String {
    let cards: String = catalogo.todos().iter().map(render_produto_card).collect();
    format!(
        r#"<section class="layout-responsivo"><h2>Produtos</h2><div class="grid-produtos">{}</div></section>"#,
        cards
    )
}
