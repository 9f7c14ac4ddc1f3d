//! User-facing copy.
//!
//! The storefront is Brazilian, so every string a shopper sees is in
//! Portuguese. Amounts are passed in already formatted.

/// The guide is already in the cart.
#[must_use]
pub fn already_in_cart(name: &str) -> String {
    format!("O guia \"{name}\" já está no seu carrinho.")
}

/// The guide was added.
#[must_use]
pub fn added_to_cart(name: &str) -> String {
    format!("\"{name}\" adicionado ao carrinho!")
}

pub const CONFIRM_CLEAR: &str = "Tem certeza que deseja limpar todo o carrinho?";

pub const EMPTY_AT_CHECKOUT: &str =
    "Seu carrinho está vazio. Adicione guias antes de finalizar a compra!";

pub const ORDER_SUCCESS: &str = "✅ Pedido finalizado com sucesso! (Simulação de pagamento). Você receberá os guias em seu e-mail.";

pub const SAVE_FAILED: &str = "Não foi possível salvar o carrinho. Tente novamente.";

pub const EMPTY_CART: &str = "Seu carrinho está vazio.";

/// Order summary shown before a simulated checkout.
///
/// `items` are `(name, formatted unit price)` pairs in cart order.
#[must_use]
pub fn order_summary<'a>(items: impl IntoIterator<Item = (&'a str, String)>, total: &str) -> String {
    let lines: Vec<String> = items
        .into_iter()
        .map(|(name, price)| format!("- {name} ({price})"))
        .collect();
    format!(
        "Resumo da Compra:\n{}\n\nTotal a Pagar: {total}\n\nConfirma a finalização da compra? (Simulação)",
        lines.join("\n")
    )
}

/// Screen-reader label of a line's remove button.
#[must_use]
pub fn remove_label(name: &str) -> String {
    format!("Remover {name}")
}

pub const CONTACT_MISSING_REQUIRED: &str = "Por favor, preencha todos os campos obrigatórios.";

pub const CONTACT_INVALID_EMAIL: &str = "Por favor, informe um e-mail válido.";

pub const CONTACT_SENT: &str = "📧 Mensagem enviada com sucesso! Em breve entraremos em contato.";
