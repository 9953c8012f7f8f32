// Alert derivation: pure, read-only scans over the catalog snapshot. No
// scan mutates anything; each preserves catalog order.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::core::Result;
use crate::modules::alerts::models::{ExpiryAlert, ExpirySeverity, StockAlert, StockSeverity};
use crate::modules::alerts::services::ranking::{AlternativeRanker, CatalogOrderRanker};
use crate::modules::catalog::models::Product;
use crate::modules::catalog::repositories::CatalogRepository;

/// Default number of alternatives offered for an out-of-stock product
pub const DEFAULT_MAX_ALTERNATIVES: usize = 3;

/// Service deriving low-stock, expiry, and alternative-product views
pub struct AlertService {
    catalog: Arc<dyn CatalogRepository>,
    ranker: Box<dyn AlternativeRanker>,
}

impl AlertService {
    pub fn new(catalog: Arc<dyn CatalogRepository>) -> Self {
        Self {
            catalog,
            ranker: Box::new(CatalogOrderRanker),
        }
    }

    /// Substitute the alternative-product ordering strategy
    pub fn with_ranker(catalog: Arc<dyn CatalogRepository>, ranker: Box<dyn AlternativeRanker>) -> Self {
        Self { catalog, ranker }
    }

    /// Products at or below their reorder level, in catalog order
    ///
    /// `Critical` when stock has fallen to half the reorder level or less;
    /// the comparison `2 × stock ≤ reorder_level` is exact, so an odd
    /// reorder level is not floored (stock 8 against level 17 is critical,
    /// 8.5 being the midpoint).
    pub async fn low_stock(&self) -> Result<Vec<StockAlert>> {
        let products = self.catalog.list().await?;

        let alerts: Vec<StockAlert> = products
            .into_iter()
            .filter(|p| p.stock <= p.reorder_level)
            .map(|product| {
                let severity = if 2 * u64::from(product.stock) <= u64::from(product.reorder_level)
                {
                    StockSeverity::Critical
                } else {
                    StockSeverity::Low
                };
                StockAlert { product, severity }
            })
            .collect();

        debug!(count = alerts.len(), "Low stock scan");
        Ok(alerts)
    }

    /// Products expiring within `[today, today + days]`, both bounds
    /// inclusive, in catalog order. Already-expired products are excluded.
    pub async fn soon_expiring(&self, days: i64) -> Result<Vec<ExpiryAlert>> {
        self.soon_expiring_as_of(days, Utc::now().date_naive()).await
    }

    /// `soon_expiring` against an explicit reference date
    pub async fn soon_expiring_as_of(
        &self,
        days: i64,
        today: NaiveDate,
    ) -> Result<Vec<ExpiryAlert>> {
        let products = self.catalog.list().await?;

        let alerts = products
            .into_iter()
            .filter_map(|product| {
                let remaining = product.days_to_expiry(today);
                if (0..=days).contains(&remaining) {
                    Some(ExpiryAlert {
                        severity: ExpirySeverity::from_days(remaining),
                        days_to_expiry: remaining,
                        product,
                    })
                } else {
                    None
                }
            })
            .collect();

        Ok(alerts)
    }

    /// Up to `max_items` in-stock products sharing the named product's
    /// category, excluding the product itself. Empty when the product is
    /// unknown or has no in-stock peers.
    pub async fn alternatives_for(
        &self,
        product_id: &str,
        max_items: usize,
    ) -> Result<Vec<Product>> {
        let Some(product) = self.catalog.find_by_id(product_id).await? else {
            return Ok(Vec::new());
        };

        let candidates: Vec<Product> = self
            .catalog
            .list()
            .await?
            .into_iter()
            .filter(|p| p.category == product.category && p.id != product.id && p.stock > 0)
            .collect();

        let mut ranked = self.ranker.rank(candidates);
        ranked.truncate(max_items);
        Ok(ranked)
    }
}
