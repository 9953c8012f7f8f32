use rust_decimal::Decimal;
use serde::Serialize;

/// Storewide headline figures for the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    /// Products in the catalog
    pub total_products: usize,
    /// Products at or below their reorder level
    pub low_stock_count: usize,
    /// Products expiring within the configured alert horizon
    pub expiring_soon_count: usize,
    /// Bills in history, all statuses
    pub bill_count: usize,
    /// Sum of totals over paid bills
    pub revenue: Decimal,
    /// Bills still pending payment
    pub pending_count: usize,
    /// Registered customers
    pub customer_count: usize,
}
