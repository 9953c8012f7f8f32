use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

/// Application-wide Result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Main application error type
///
/// Every variant is a recoverable, caller-facing condition; none of these
/// abort the process. The billing variants (`OutOfStock`, `InvalidQuantity`,
/// `EmptyCart`, `NoCustomer`) signal unmet preconditions and leave the cart
/// and bill history untouched.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// Attempted to add a zero-stock product to a cart
    #[error("Out of stock: {0}")]
    OutOfStock(String),

    /// Cart quantity update with a non-positive quantity
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Checkout attempted on a cart with no lines
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout attempted without a known customer
    #[error("No customer: {0}")]
    NoCustomer(String),

    /// Validation errors for business rules
    #[error("Validation error: {0}")]
    Validation(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let status_code = self.status_code();
        let error_message = self.to_string();

        HttpResponse::build(status_code).json(serde_json::json!({
            "error": {
                "message": error_message,
                "code": status_code.as_u16(),
            }
        }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::OutOfStock(_) => StatusCode::CONFLICT,
            AppError::InvalidQuantity(_) => StatusCode::BAD_REQUEST,
            AppError::EmptyCart => StatusCode::BAD_REQUEST,
            AppError::NoCustomer(_) => StatusCode::BAD_REQUEST,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// Helper functions for common error scenarios
impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        AppError::NotFound(resource.into())
    }

    pub fn out_of_stock(product: impl Into<String>) -> Self {
        AppError::OutOfStock(product.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
