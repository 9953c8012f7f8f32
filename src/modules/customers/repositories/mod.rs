pub mod customer_repository;

pub use customer_repository::{seed_customers, CustomerRepository, InMemoryCustomers};
