use super::{format_count, format_customer_id, format_product_id, format_transaction_id, WeightedChoice, WeightedChoiceError};
use anyhow::Result;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::rngs::StdRng;

#[test]
fn test_ids_are_prefixed_and_zero_padded() {
    let test_cases = vec![
        (format_transaction_id(1), "TXN00000001"),
        (format_transaction_id(12_345_678), "TXN12345678"),
        (format_customer_id(42), "CUST000042"),
        (format_customer_id(50_000), "CUST050000"),
        (format_product_id(7), "PROD00007"),
        (format_product_id(5_000), "PROD05000"),
    ];

    for (formatted, expected) in test_cases {
        assert_eq!(formatted, expected);
    }
}

#[test]
fn test_transaction_id_widens_past_eight_digits() {
    assert_eq!(format_transaction_id(123_456_789), "TXN123456789");
}

#[test]
fn test_count_uses_thousands_separators() {
    let test_cases = vec![
        (0, "0"),
        (999, "999"),
        (1_000, "1,000"),
        (10_000, "10,000"),
        (100_000, "100,000"),
        (5_000_000, "5,000,000"),
        (1_234_567, "1,234,567"),
    ];

    for (count, expected) in test_cases {
        assert_eq!(format_count(count), expected);
    }
}

#[test]
fn test_weighted_choice_rejects_empty_and_all_zero_weights() {
    assert!(matches!(WeightedChoice::<&str>::new(&[]), Err(WeightedChoiceError::Empty)));
    assert!(matches!(WeightedChoice::new(&[("a", 0), ("b", 0)]), Err(WeightedChoiceError::InvalidWeights(_))));
}

#[test]
fn test_weighted_choice_reports_probabilities_from_weights() -> Result<()> {
    let choice = WeightedChoice::new(&[("Yes", 1), ("No", 4)])?;

    assert!((choice.probability_of(&"Yes") - 0.2).abs() < f64::EPSILON);
    assert!((choice.probability_of(&"No") - 0.8).abs() < f64::EPSILON);
    assert_eq!(choice.probability_of(&"Maybe"), 0.0);

    Ok(())
}

#[test]
fn test_weighted_choice_never_draws_zero_weight_values() -> Result<()> {
    let choice = WeightedChoice::new(&[("never", 0), ("always", 3)])?;
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1_000 {
        assert_eq!(choice.sample(&mut rng), "always");
    }

    Ok(())
}

#[test]
fn test_weighted_choice_sampling_follows_weights() -> Result<()> {
    let choice = WeightedChoice::new(&[(true, 1), (false, 4)])?;
    let mut rng = StdRng::seed_from_u64(42);
    let draws = 50_000;

    let hits = (0..draws).filter(|_| choice.sample(&mut rng)).count();
    let fraction = hits as f64 / draws as f64;

    assert!((fraction - 0.2).abs() < 0.02, "observed fraction {fraction}");

    Ok(())
}
