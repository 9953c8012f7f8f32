// An invoice is a presentation-oriented projection of a bill plus customer
// details. It is derived on demand and never stored; the bill remains the
// system of record.

use rust_decimal::Decimal;
use serde::Serialize;

/// Customer snippet embedded in an invoice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerDetails {
    pub name: String,
    pub address: String,
    pub email: String,
    pub phone: String,
}

/// A bill line re-shaped for invoice display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceLine {
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
}

/// A read-only invoice view over a bill
///
/// Composing the same bill twice always yields identical output: the
/// invoice number is derived from the bill's issue date, not the date the
/// view happens to be generated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceView {
    /// `INV-<YYYYMMDD>-<NNNN>` where the date is the bill's issue date and
    /// the suffix is the bill ID's numeric portion, at least four digits
    pub invoice_number: String,
    /// Bill issue date, ISO `yyyy-MM-dd`
    pub invoice_date: String,
    /// Issue date plus the configured due period, ISO `yyyy-MM-dd`
    pub due_date: String,
    pub customer: CustomerDetails,
    pub items: Vec<InvoiceLine>,
    // Monetary summary passed through from the bill unchanged
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    /// Total formatted for display, e.g. `$28.58`
    pub total_display: String,
    pub payment_method: String,
    pub status: String,
}
