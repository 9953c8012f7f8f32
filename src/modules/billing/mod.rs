// Billing module: cart accumulation, checkout, and bill history

pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Bill, BillItem, BillStatus, Cart, CartLine, CartTotals};
pub use repositories::{BillRepository, CartRepository, InMemoryBills, InMemoryCarts};
pub use services::{CartService, CheckoutService};
