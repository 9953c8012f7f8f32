// Catalog storage abstraction. The engine depends on this trait rather than
// a module-level collection so a persistent store can be substituted without
// touching the cart, alert, or checkout contracts.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::{AppError, Result};
use crate::modules::catalog::models::Product;

/// Read-only catalog access
///
/// The catalog is read-mostly: products are seeded at startup and scanned by
/// the cart, alert, and report services. `list` preserves catalog order,
/// which alert derivation relies on.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All products in catalog order
    async fn list(&self) -> Result<Vec<Product>>;

    /// Look up a single product by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>>;
}

/// In-memory catalog backed by a process-local collection
pub struct InMemoryCatalog {
    products: RwLock<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: RwLock::new(products),
        }
    }

    /// Catalog pre-loaded with the standard pharmacy seed data
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list(&self) -> Result<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|_| AppError::internal("Catalog lock poisoned"))?;
        Ok(products.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>> {
        let products = self
            .products
            .read()
            .map_err(|_| AppError::internal("Catalog lock poisoned"))?;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    // Seed dates are compile-time constants and always valid
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}

/// Standard eight-product pharmacy catalog used at startup
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: "1".to_string(),
            name: "Amoxicillin 500mg".to_string(),
            category: "Antibiotics".to_string(),
            description: "Antibiotic for bacterial infections".to_string(),
            batch_no: "AM5001".to_string(),
            expiry_date: date(2026, 3, 15),
            stock: 120,
            price: Decimal::new(1299, 2),
            manufacturer: "Pharma Labs Inc.".to_string(),
            location: "Shelf A-12".to_string(),
            reorder_level: 30,
        },
        Product {
            id: "2".to_string(),
            name: "Paracetamol 500mg".to_string(),
            category: "Pain Relief".to_string(),
            description: "Pain reliever and fever reducer".to_string(),
            batch_no: "PC5002".to_string(),
            expiry_date: date(2025, 5, 22),
            stock: 210,
            price: Decimal::new(549, 2),
            manufacturer: "MediCorp".to_string(),
            location: "Shelf B-05".to_string(),
            reorder_level: 50,
        },
        Product {
            id: "3".to_string(),
            name: "Cetirizine 10mg".to_string(),
            category: "Allergy".to_string(),
            description: "Antihistamine for allergies".to_string(),
            batch_no: "CT1003".to_string(),
            expiry_date: date(2025, 11, 30),
            stock: 8,
            price: Decimal::new(899, 2),
            manufacturer: "AllergyCare".to_string(),
            location: "Shelf C-03".to_string(),
            reorder_level: 20,
        },
        Product {
            id: "4".to_string(),
            name: "Metformin 850mg".to_string(),
            category: "Diabetes".to_string(),
            description: "Oral antidiabetic medication".to_string(),
            batch_no: "MT8501".to_string(),
            expiry_date: date(2025, 4, 16),
            stock: 75,
            price: Decimal::new(1579, 2),
            manufacturer: "DiabeCare".to_string(),
            location: "Shelf D-09".to_string(),
            reorder_level: 25,
        },
        Product {
            id: "5".to_string(),
            name: "Atorvastatin 20mg".to_string(),
            category: "Cardiovascular".to_string(),
            description: "Cholesterol-lowering medication".to_string(),
            batch_no: "AT2001".to_string(),
            expiry_date: date(2025, 8, 1),
            stock: 65,
            price: Decimal::new(2250, 2),
            manufacturer: "HeartHealth Inc.".to_string(),
            location: "Shelf E-02".to_string(),
            reorder_level: 20,
        },
        Product {
            id: "6".to_string(),
            name: "Omeprazole 20mg".to_string(),
            category: "Gastrointestinal".to_string(),
            description: "Proton pump inhibitor".to_string(),
            batch_no: "OM2001".to_string(),
            expiry_date: date(2025, 2, 28),
            stock: 45,
            price: Decimal::new(1825, 2),
            manufacturer: "GastroPharm".to_string(),
            location: "Shelf F-04".to_string(),
            reorder_level: 15,
        },
        Product {
            id: "7".to_string(),
            name: "Vitamin D3 1000IU".to_string(),
            category: "Vitamins".to_string(),
            description: "Vitamin D supplement".to_string(),
            batch_no: "VD1001".to_string(),
            expiry_date: date(2026, 12, 10),
            stock: 180,
            price: Decimal::new(999, 2),
            manufacturer: "VitaLife".to_string(),
            location: "Shelf G-01".to_string(),
            reorder_level: 40,
        },
        Product {
            id: "8".to_string(),
            name: "Aspirin 75mg".to_string(),
            category: "Cardiovascular".to_string(),
            description: "Anti-platelet medication".to_string(),
            batch_no: "AS7501".to_string(),
            expiry_date: date(2026, 1, 15),
            stock: 15,
            price: Decimal::new(649, 2),
            manufacturer: "HeartHealth Inc.".to_string(),
            location: "Shelf E-03".to_string(),
            reorder_level: 30,
        },
    ]
}
