// ============================================================================
// MENU LATERAL - Demonstração de menu responsivo
// ============================================================================

pub fn render_menu_lateral() -> String {
    r#"<section class="menu-lateral"><aside class="menu"><ul><li><a href="/roteamento" data-link>Categorias</a></li><li><a href="/checkout" data-link>Carrinho</a></li></ul></aside><div class="conteudo"><h2>Menu lateral</h2></div></section>"#
        .to_string()
}
