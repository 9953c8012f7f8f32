use std::sync::RwLock;

use async_trait::async_trait;

use crate::core::{AppError, Result};
use crate::modules::customers::models::Customer;

/// Customer storage abstraction
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// All customers in insertion order
    async fn list(&self) -> Result<Vec<Customer>>;

    /// Look up a single customer by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>>;

    /// Add a customer, assigning the next sequential ID
    async fn add(&self, customer: Customer) -> Result<Customer>;
}

/// In-memory customer store
pub struct InMemoryCustomers {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomers {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self {
            customers: RwLock::new(customers),
        }
    }

    /// Store pre-loaded with the standard customer seed data
    pub fn seeded() -> Self {
        Self::new(seed_customers())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn list(&self) -> Result<Vec<Customer>> {
        let customers = self
            .customers
            .read()
            .map_err(|_| AppError::internal("Customer lock poisoned"))?;
        Ok(customers.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Customer>> {
        let customers = self
            .customers
            .read()
            .map_err(|_| AppError::internal("Customer lock poisoned"))?;
        Ok(customers.iter().find(|c| c.id == id).cloned())
    }

    async fn add(&self, mut customer: Customer) -> Result<Customer> {
        let mut customers = self
            .customers
            .write()
            .map_err(|_| AppError::internal("Customer lock poisoned"))?;

        // 1-based sequence over the collection length at insertion time
        customer.id = (customers.len() + 1).to_string();
        customers.push(customer.clone());

        Ok(customer)
    }
}

/// Standard three-customer seed data used at startup
pub fn seed_customers() -> Vec<Customer> {
    vec![
        Customer {
            id: "1".to_string(),
            name: "John Smith".to_string(),
            email: "john.smith@email.com".to_string(),
            phone: "555-123-4567".to_string(),
            address: "123 Main St, Anytown, ST 12345".to_string(),
        },
        Customer {
            id: "2".to_string(),
            name: "Emma Johnson".to_string(),
            email: "emma.johnson@email.com".to_string(),
            phone: "555-987-6543".to_string(),
            address: "456 Oak Ave, Somewhere, ST 67890".to_string(),
        },
        Customer {
            id: "3".to_string(),
            name: "Michael Brown".to_string(),
            email: "michael.brown@email.com".to_string(),
            phone: "555-456-7890".to_string(),
            address: "789 Pine Rd, Nowhere, ST 34567".to_string(),
        },
    ]
}
