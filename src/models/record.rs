use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use crate::models::{Category, CustomerSegment, PaymentMethod, Returned, StoreLocation};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Represents a single synthesized row of the output CSV file.
///
/// Field declaration order is the column order of the file; `HEADERS` must stay in step with it.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionRecord {
    /// `TXN` followed by the 1-based row number, zero-padded to 8 digits.
    pub transaction_id: String,
    /// Local date-time without an offset, serialized as ISO-8601.
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime,
    pub customer_id: String,
    pub product_id: String,
    pub category: Category,
    pub quantity: u32,
    /// Price of one unit, always at cent resolution.
    pub unit_price: Decimal,
    /// Fraction taken off the gross amount, `0` when no discount applies.
    pub discount_applied: Decimal,
    /// `quantity * unit_price * (1 - discount_applied)` rounded to cents.
    pub total_amount: Decimal,
    pub payment_method: PaymentMethod,
    pub store_location: StoreLocation,
    pub customer_age: u32,
    pub customer_segment: CustomerSegment,
    /// Missing ratings serialize as an empty field.
    pub rating: Option<Decimal>,
    pub returned: Returned
}

impl TransactionRecord {
    pub const HEADERS: [&'static str; 15] = [
        "transaction_id",
        "timestamp",
        "customer_id",
        "product_id",
        "category",
        "quantity",
        "unit_price",
        "discount_applied",
        "total_amount",
        "payment_method",
        "store_location",
        "customer_age",
        "customer_segment",
        "rating",
        "returned"
    ];

    /// Derives the line total from its inputs, rounding half-to-even only after the full product.
    pub fn total_for(quantity: u32, unit_price: Decimal, discount: Decimal) -> Decimal {
        (Decimal::from(quantity) * unit_price * (Decimal::ONE - discount)).round_dp(2)
    }
}

fn serialize_timestamp<S: Serializer>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}
