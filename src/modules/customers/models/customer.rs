use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A customer record
///
/// No uniqueness is enforced beyond the ID; two customers may share a name
/// or email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique customer ID, assigned by the store
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl Customer {
    /// Create a customer with validation; the ID is assigned when the record
    /// is added to the store.
    pub fn new(name: String, email: String, phone: String, address: String) -> Result<Self> {
        Self::validate_name(&name)?;
        Self::validate_email(&email)?;
        Self::validate_phone(&phone)?;
        Self::validate_address(&address)?;

        Ok(Self {
            id: String::new(),
            name,
            email,
            phone,
            address,
        })
    }

    fn validate_name(name: &str) -> Result<()> {
        if name.trim().chars().count() < 2 {
            return Err(AppError::validation("Name must be at least 2 characters"));
        }
        Ok(())
    }

    fn validate_email(email: &str) -> Result<()> {
        let valid = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !valid {
            return Err(AppError::validation("Invalid email address"));
        }
        Ok(())
    }

    fn validate_phone(phone: &str) -> Result<()> {
        if phone.chars().filter(char::is_ascii_digit).count() < 10 {
            return Err(AppError::validation(
                "Phone number must be at least 10 digits",
            ));
        }
        Ok(())
    }

    fn validate_address(address: &str) -> Result<()> {
        if address.trim().chars().count() < 5 {
            return Err(AppError::validation(
                "Address must be at least 5 characters",
            ));
        }
        Ok(())
    }
}
