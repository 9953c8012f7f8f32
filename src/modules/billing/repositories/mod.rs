pub mod bill_repository;
pub mod cart_repository;

pub use bill_repository::{seed_bills, BillRepository, InMemoryBills};
pub use cart_repository::{CartRepository, InMemoryCarts};
