pub mod invoice;

pub use invoice::{CustomerDetails, InvoiceLine, InvoiceView};
