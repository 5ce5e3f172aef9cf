use crate::domain::ports::InvoiceNumberSource;
use chrono::Utc;
use std::sync::atomic::{AtomicU64, Ordering};

pub const INVOICE_PREFIX: &str = "INV-";

/// `INV-20261017093015123`（UTC，精確到毫秒）
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampInvoiceNumbers;

impl InvoiceNumberSource for TimestampInvoiceNumbers {
    fn next_invoice_number(&self) -> String {
        format!("{}{}", INVOICE_PREFIX, Utc::now().format("%Y%m%d%H%M%S%3f"))
    }
}

/// Counter-based numbers, `INV-{prefix}000001`. The counter belongs to the
/// instance, so separate compilers never share a sequence.
#[derive(Debug, Default)]
pub struct SequentialInvoiceNumbers {
    prefix: String,
    next: AtomicU64,
}

impl SequentialInvoiceNumbers {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, first: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(first),
        }
    }
}

impl InvoiceNumberSource for SequentialInvoiceNumbers {
    fn next_invoice_number(&self) -> String {
        let sequence = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}{:06}", INVOICE_PREFIX, self.prefix, sequence)
    }
}

/// Same number every call. Useful for reproducible payloads.
#[derive(Debug, Clone)]
pub struct FixedInvoiceNumber(String);

impl FixedInvoiceNumber {
    pub fn new(suffix: &str) -> Self {
        Self(format!("{}{}", INVOICE_PREFIX, suffix))
    }
}

impl InvoiceNumberSource for FixedInvoiceNumber {
    fn next_invoice_number(&self) -> String {
        self.0.clone()
    }
}
