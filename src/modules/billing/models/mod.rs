pub mod bill;
pub mod cart;

pub use bill::{Bill, BillItem, BillStatus};
pub use cart::{Cart, CartLine, CartTotals};
