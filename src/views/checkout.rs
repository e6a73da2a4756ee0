// ============================================================================
// CHECKOUT - Finalização de compra
// ============================================================================

pub fn render_checkout() -> String {
    r#"<section class="checkout"><h2>Checkout</h2><ol class="etapas"><li>Identificação</li><li>Entrega</li><li>Pagamento</li></ol></section>"#
        .to_string()
}
