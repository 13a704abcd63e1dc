//! `wa.me` deep links.

const WHATSAPP_BASE: &str = "https://wa.me";

/// Greeting used by the hero call-to-action.
pub const HERO_GREETING: &str = "Olá Guilherme! Quero um orçamento de TI.";
/// Greeting used by the floating chat button.
pub const FLOATING_GREETING: &str = "Olá Guilherme! Quero falar.";

/// Link opening a chat with `number` prefilled with `text`.
pub fn chat_link(number: &str, text: &str) -> String {
    format!("{WHATSAPP_BASE}/{number}?text={}", urlencoding::encode(text))
}

/// Chat link tagged with the selected service: `[service] message`.
pub fn service_chat_link(number: &str, service: &str, message: &str) -> String {
    chat_link(number, &format!("[{service}] {message}"))
}
