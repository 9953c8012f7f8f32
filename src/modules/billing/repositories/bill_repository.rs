use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::billing::models::{Bill, BillItem, BillStatus};

/// Bill history storage abstraction
///
/// The history is append-only: a bill never changes once stored. The store
/// assigns the sequential `B00N` identifier under the same lock that appends,
/// so concurrent checkouts cannot race on the sequence.
#[async_trait]
pub trait BillRepository: Send + Sync {
    /// Assign the next sequential ID to `bill`, append it, and return the
    /// stored record
    async fn append(&self, bill: Bill) -> Result<Bill>;

    /// All bills in append order
    async fn list(&self) -> Result<Vec<Bill>>;

    /// Look up a bill by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Bill>>;
}

/// In-memory append-only bill history
pub struct InMemoryBills {
    bills: RwLock<Vec<Bill>>,
}

impl InMemoryBills {
    pub fn new(bills: Vec<Bill>) -> Self {
        Self {
            bills: RwLock::new(bills),
        }
    }

    /// History pre-loaded with the three historical bills (B001–B003), so
    /// the first live checkout produces B004
    pub fn seeded() -> Self {
        Self::new(seed_bills())
    }
}

#[async_trait]
impl BillRepository for InMemoryBills {
    async fn append(&self, mut bill: Bill) -> Result<Bill> {
        let mut bills = self
            .bills
            .write()
            .map_err(|_| AppError::internal("Bill history lock poisoned"))?;

        // 1-based sequence over the history length at creation time; the
        // zero padding widens automatically past 999
        bill.id = format!("B{:03}", bills.len() + 1);
        bills.push(bill.clone());

        Ok(bill)
    }

    async fn list(&self) -> Result<Vec<Bill>> {
        let bills = self
            .bills
            .read()
            .map_err(|_| AppError::internal("Bill history lock poisoned"))?;
        Ok(bills.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Bill>> {
        let bills = self
            .bills
            .read()
            .map_err(|_| AppError::internal("Bill history lock poisoned"))?;
        Ok(bills.iter().find(|b| b.id == id).cloned())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Historical bills present at startup
pub fn seed_bills() -> Vec<Bill> {
    vec![
        Bill {
            id: "B001".to_string(),
            customer_id: "1".to_string(),
            customer_name: "John Smith".to_string(),
            items: vec![
                BillItem {
                    product_id: "1".to_string(),
                    product_name: "Amoxicillin 500mg".to_string(),
                    quantity: 2,
                    price: Decimal::new(1299, 2),
                    discount: Decimal::ZERO,
                    tax: Decimal::new(182, 2),
                    total: Decimal::new(2780, 2),
                },
                BillItem {
                    product_id: "2".to_string(),
                    product_name: "Paracetamol 500mg".to_string(),
                    quantity: 1,
                    price: Decimal::new(549, 2),
                    discount: Decimal::ZERO,
                    tax: Decimal::new(77, 2),
                    total: Decimal::new(626, 2),
                },
            ],
            subtotal: Decimal::new(3147, 2),
            tax: Decimal::new(259, 2),
            discount: Decimal::ZERO,
            total: Decimal::new(3406, 2),
            date: date(2025, 4, 8),
            payment_method: "Credit Card".to_string(),
            status: BillStatus::Paid,
        },
        Bill {
            id: "B002".to_string(),
            customer_id: "2".to_string(),
            customer_name: "Emma Johnson".to_string(),
            items: vec![BillItem {
                product_id: "7".to_string(),
                product_name: "Vitamin D3 1000IU".to_string(),
                quantity: 3,
                price: Decimal::new(999, 2),
                discount: Decimal::new(500, 2),
                tax: Decimal::new(315, 2),
                total: Decimal::new(2812, 2),
            }],
            subtotal: Decimal::new(2997, 2),
            tax: Decimal::new(315, 2),
            discount: Decimal::new(500, 2),
            total: Decimal::new(2812, 2),
            date: date(2025, 4, 7),
            payment_method: "Cash".to_string(),
            status: BillStatus::Paid,
        },
        Bill {
            id: "B003".to_string(),
            customer_id: "3".to_string(),
            customer_name: "Michael Brown".to_string(),
            items: vec![
                BillItem {
                    product_id: "5".to_string(),
                    product_name: "Atorvastatin 20mg".to_string(),
                    quantity: 1,
                    price: Decimal::new(2250, 2),
                    discount: Decimal::ZERO,
                    tax: Decimal::new(315, 2),
                    total: Decimal::new(2565, 2),
                },
                BillItem {
                    product_id: "6".to_string(),
                    product_name: "Omeprazole 20mg".to_string(),
                    quantity: 1,
                    price: Decimal::new(1825, 2),
                    discount: Decimal::ZERO,
                    tax: Decimal::new(256, 2),
                    total: Decimal::new(2081, 2),
                },
            ],
            subtotal: Decimal::new(4075, 2),
            tax: Decimal::new(571, 2),
            discount: Decimal::ZERO,
            total: Decimal::new(4646, 2),
            date: date(2025, 4, 9),
            payment_method: "Insurance".to_string(),
            status: BillStatus::Pending,
        },
    ]
}
