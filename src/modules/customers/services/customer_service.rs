use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::core::{AppError, Result};
use crate::modules::customers::models::Customer;
use crate::modules::customers::repositories::CustomerRepository;

/// Request payload for registering a customer
#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Service for customer records
pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    pub async fn list(&self) -> Result<Vec<Customer>> {
        self.customers.list().await
    }

    pub async fn get(&self, id: &str) -> Result<Customer> {
        self.customers
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Customer {}", id)))
    }

    /// Validate and register a new customer
    pub async fn add(&self, request: CreateCustomerRequest) -> Result<Customer> {
        let customer = Customer::new(request.name, request.email, request.phone, request.address)?;
        let added = self.customers.add(customer).await?;

        info!(customer_id = %added.id, name = %added.name, "Customer added");
        Ok(added)
    }
}
