pub mod cart_service;
pub mod checkout_service;

pub use cart_service::{CartService, CartView};
pub use checkout_service::{CheckoutRequest, CheckoutService};
