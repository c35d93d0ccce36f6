mod record;

use rand::Rng;
use rand::distr::{Distribution, StandardUniform};
use serde::Serialize;

pub use record::TransactionRecord;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Home,
    Sports,
    Books,
    Toys,
    Beauty
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Home,
        Category::Sports,
        Category::Books,
        Category::Toys,
        Category::Beauty
    ];
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    Cash,
    #[serde(rename = "Mobile Payment")]
    MobilePayment,
    #[serde(rename = "Gift Card")]
    GiftCard
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Cash,
        PaymentMethod::MobilePayment,
        PaymentMethod::GiftCard
    ];
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum StoreLocation {
    #[serde(rename = "New York")]
    NewYork,
    #[serde(rename = "Los Angeles")]
    LosAngeles,
    Chicago,
    Houston,
    Phoenix,
    Philadelphia
}

impl StoreLocation {
    pub const ALL: [StoreLocation; 6] = [
        StoreLocation::NewYork,
        StoreLocation::LosAngeles,
        StoreLocation::Chicago,
        StoreLocation::Houston,
        StoreLocation::Phoenix,
        StoreLocation::Philadelphia
    ];
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum CustomerSegment {
    Regular,
    Silver,
    Gold,
    Platinum
}

impl CustomerSegment {
    pub const ALL: [CustomerSegment; 4] = [
        CustomerSegment::Regular,
        CustomerSegment::Silver,
        CustomerSegment::Gold,
        CustomerSegment::Platinum
    ];
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Returned {
    Yes,
    No
}

//NOTE: `returned` is skewed, so it is sampled through a `WeightedChoice` rather than `StandardUniform`
fn uniform_variant<T: Copy, R: Rng + ?Sized>(rng: &mut R, variants: &[T]) -> T {
    variants[rng.random_range(0..variants.len())]
}

impl Distribution<Category> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Category {
        uniform_variant(rng, &Category::ALL)
    }
}

impl Distribution<PaymentMethod> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PaymentMethod {
        uniform_variant(rng, &PaymentMethod::ALL)
    }
}

impl Distribution<StoreLocation> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> StoreLocation {
        uniform_variant(rng, &StoreLocation::ALL)
    }
}

impl Distribution<CustomerSegment> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CustomerSegment {
        uniform_variant(rng, &CustomerSegment::ALL)
    }
}
