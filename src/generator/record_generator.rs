use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use rand::Rng;
use rand::distr::Distribution;
use rust_decimal::Decimal;
use tracing::debug;

use crate::generator::GeneratorError;
use crate::models::{Returned, TransactionRecord};
use crate::types::{format_customer_id, format_product_id, format_transaction_id, RowIndex, WeightedChoice};

const BASE_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2020, 1, 1) {
    Some(date) => date,
    None => panic!("2020-01-01 is a valid calendar date")
};
const TIMESTAMP_WINDOW_DAYS: i64 = 1095;

const MAX_CUSTOMER_ID: u32 = 50_000;
const MAX_PRODUCT_ID: u32 = 5_000;
const MIN_QUANTITY: u32 = 1;
const MAX_QUANTITY: u32 = 10;
const MIN_UNIT_PRICE_CENTS: i64 = 599;
const MAX_UNIT_PRICE_CENTS: i64 = 99_999;
const MIN_CUSTOMER_AGE: u32 = 18;
const MAX_CUSTOMER_AGE: u32 = 80;

const RATING_MISSING_PROBABILITY: f64 = 0.1;
const MIN_RATING: f64 = 1.0;
const MAX_RATING: f64 = 5.0;

/// Synthesizes transaction records one at a time from an owned random source.
///
/// Every field is sampled independently except `total_amount`, which is derived from the
/// quantity, unit price and discount of the same record. Seeding the RNG makes the output
/// reproducible.
pub struct RecordGenerator<R: Rng> {
    rng: R,
    discounts: WeightedChoice<Decimal>,
    returns: WeightedChoice<Returned>
}

impl<R: Rng> RecordGenerator<R> {
    /// Creates a generator drawing from `rng`.
    ///
    /// # Errors
    /// Returns `GeneratorError::Distribution` if one of the weighted field tables is malformed.
    pub fn new(rng: R) -> Result<Self, GeneratorError> {
        //NOTE: Four zero entries against one per discount level, so half of all rows are undiscounted
        let discounts = WeightedChoice::new(&[
            (Decimal::ZERO, 4),
            (Decimal::new(1, 1), 1),
            (Decimal::new(15, 2), 1),
            (Decimal::new(2, 1), 1),
            (Decimal::new(25, 2), 1)
        ])?;

        let returns = WeightedChoice::new(&[
            (Returned::Yes, 1),
            (Returned::No, 4)
        ])?;

        debug!(
            "Sampling with a {:.0}% return rate and {:.0}% of rows undiscounted",
            returns.probability_of(&Returned::Yes) * 100.0,
            discounts.probability_of(&Decimal::ZERO) * 100.0
        );

        Ok(Self { rng, discounts, returns })
    }

    /// Synthesizes the record stored at `row_index`; its transaction id is `row_index + 1`.
    pub fn next_record(&mut self, row_index: RowIndex) -> TransactionRecord {
        let timestamp = self.next_timestamp();
        let customer_id = format_customer_id(self.rng.random_range(1..=MAX_CUSTOMER_ID));
        let product_id = format_product_id(self.rng.random_range(1..=MAX_PRODUCT_ID));
        let category = self.rng.random();
        let quantity = self.rng.random_range(MIN_QUANTITY..=MAX_QUANTITY);
        let unit_price = Decimal::new(self.rng.random_range(MIN_UNIT_PRICE_CENTS..=MAX_UNIT_PRICE_CENTS), 2);
        let discount_applied = self.discounts.sample(&mut self.rng);

        TransactionRecord {
            transaction_id: format_transaction_id(row_index + 1),
            timestamp,
            customer_id,
            product_id,
            category,
            quantity,
            unit_price,
            discount_applied,
            total_amount: TransactionRecord::total_for(quantity, unit_price, discount_applied),
            payment_method: self.rng.random(),
            store_location: self.rng.random(),
            customer_age: self.rng.random_range(MIN_CUSTOMER_AGE..=MAX_CUSTOMER_AGE),
            customer_segment: self.rng.random(),
            rating: self.next_rating(),
            returned: self.returns.sample(&mut self.rng)
        }
    }

    fn next_timestamp(&mut self) -> NaiveDateTime {
        let days = self.rng.random_range(0..=TIMESTAMP_WINDOW_DAYS);
        let hours = self.rng.random_range(0..=23);
        let minutes = self.rng.random_range(0..=59);

        BASE_DATE.and_time(NaiveTime::MIN)
            + TimeDelta::days(days)
            + TimeDelta::hours(hours)
            + TimeDelta::minutes(minutes)
    }

    fn next_rating(&mut self) -> Option<Decimal> {
        if self.rng.random_bool(RATING_MISSING_PROBABILITY) {
            return None
        }

        let rating: f64 = self.rng.random_range(MIN_RATING..=MAX_RATING);

        Some(Decimal::new((rating * 10.0).round() as i64, 1))
    }
}
