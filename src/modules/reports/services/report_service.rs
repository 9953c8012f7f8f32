use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::info;

use crate::core::Result;
use crate::modules::alerts::services::AlertService;
use crate::modules::billing::models::BillStatus;
use crate::modules::billing::repositories::BillRepository;
use crate::modules::catalog::repositories::CatalogRepository;
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::reports::models::DashboardSummary;

/// Service aggregating storewide dashboard figures
pub struct ReportService {
    catalog: Arc<dyn CatalogRepository>,
    bills: Arc<dyn BillRepository>,
    customers: Arc<dyn CustomerRepository>,
    alerts: Arc<AlertService>,
    expiry_alert_days: i64,
}

impl ReportService {
    pub fn new(
        catalog: Arc<dyn CatalogRepository>,
        bills: Arc<dyn BillRepository>,
        customers: Arc<dyn CustomerRepository>,
        alerts: Arc<AlertService>,
        expiry_alert_days: i64,
    ) -> Self {
        Self {
            catalog,
            bills,
            customers,
            alerts,
            expiry_alert_days,
        }
    }

    /// Headline figures across catalog, bill history, and customers
    pub async fn summary(&self) -> Result<DashboardSummary> {
        let products = self.catalog.list().await?;
        let bills = self.bills.list().await?;
        let customers = self.customers.list().await?;
        let low_stock = self.alerts.low_stock().await?;
        let expiring = self.alerts.soon_expiring(self.expiry_alert_days).await?;

        let revenue: Decimal = bills
            .iter()
            .filter(|b| b.status == BillStatus::Paid)
            .map(|b| b.total)
            .sum();
        let pending_count = bills
            .iter()
            .filter(|b| b.status == BillStatus::Pending)
            .count();

        let summary = DashboardSummary {
            total_products: products.len(),
            low_stock_count: low_stock.len(),
            expiring_soon_count: expiring.len(),
            bill_count: bills.len(),
            revenue,
            pending_count,
            customer_count: customers.len(),
        };

        info!(
            bills = summary.bill_count,
            revenue = %summary.revenue,
            low_stock = summary.low_stock_count,
            "Dashboard summary generated"
        );

        Ok(summary)
    }
}
