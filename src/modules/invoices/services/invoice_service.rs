use std::sync::Arc;

use chrono::Duration;

use crate::core::currency::format_usd;
use crate::core::{AppError, Result};
use crate::modules::billing::models::Bill;
use crate::modules::billing::repositories::BillRepository;
use crate::modules::customers::models::Customer;
use crate::modules::customers::repositories::CustomerRepository;
use crate::modules::invoices::models::{CustomerDetails, InvoiceLine, InvoiceView};

/// Composes invoice views over finalized bills
pub struct InvoiceService {
    bills: Arc<dyn BillRepository>,
    customers: Arc<dyn CustomerRepository>,
    due_days: i64,
}

impl InvoiceService {
    pub fn new(
        bills: Arc<dyn BillRepository>,
        customers: Arc<dyn CustomerRepository>,
        due_days: i64,
    ) -> Self {
        Self {
            bills,
            customers,
            due_days,
        }
    }

    /// Invoice number for a bill: `INV-<YYYYMMDD>-<NNNN>`
    ///
    /// The date portion is the bill's issue date, making the number stable
    /// per bill no matter when the view is generated. The suffix strips all
    /// non-digits from the bill ID and left-pads to at least four digits,
    /// widening rather than truncating beyond 9999.
    pub fn invoice_number(bill: &Bill) -> String {
        let digits: String = bill.id.chars().filter(char::is_ascii_digit).collect();
        format!("INV-{}-{:0>4}", bill.date.format("%Y%m%d"), digits)
    }

    /// Pure projection of a bill plus customer into an invoice view;
    /// idempotent, no side effects
    pub fn compose(&self, bill: &Bill, customer: &Customer) -> InvoiceView {
        let due_date = bill.date + Duration::days(self.due_days);

        InvoiceView {
            invoice_number: Self::invoice_number(bill),
            invoice_date: bill.date.format("%Y-%m-%d").to_string(),
            due_date: due_date.format("%Y-%m-%d").to_string(),
            customer: CustomerDetails {
                name: customer.name.clone(),
                address: customer.address.clone(),
                email: customer.email.clone(),
                phone: customer.phone.clone(),
            },
            items: bill
                .items
                .iter()
                .map(|item| InvoiceLine {
                    name: item.product_name.clone(),
                    quantity: item.quantity,
                    price: item.price,
                    tax: item.tax,
                    discount: item.discount,
                    total: item.total,
                })
                .collect(),
            subtotal: bill.subtotal,
            tax: bill.tax,
            discount: bill.discount,
            total: bill.total,
            total_display: format_usd(bill.total),
            payment_method: bill.payment_method.clone(),
            status: bill.status.to_string(),
        }
    }

    /// Look up a bill and its customer and compose the invoice view
    pub async fn invoice_for(&self, bill_id: &str) -> Result<InvoiceView> {
        let bill = self
            .bills
            .find_by_id(bill_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Bill {}", bill_id)))?;

        let customer = self
            .customers
            .find_by_id(&bill.customer_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Customer {}", bill.customer_id)))?;

        Ok(self.compose(&bill, &customer))
    }
}
