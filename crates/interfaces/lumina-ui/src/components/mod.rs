pub mod cart_panel;
pub mod chat_panel;
pub mod navbar;
pub mod price_chart;
pub mod product_card;
