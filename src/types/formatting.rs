const TRANSACTION_PREFIX: &str = "TXN";
const CUSTOMER_PREFIX: &str = "CUST";
const PRODUCT_PREFIX: &str = "PROD";

pub fn format_transaction_id(sequence: u64) -> String {
    format!("{TRANSACTION_PREFIX}{sequence:08}")
}

pub fn format_customer_id(customer: u32) -> String {
    format!("{CUSTOMER_PREFIX}{customer:06}")
}

pub fn format_product_id(product: u32) -> String {
    format!("{PRODUCT_PREFIX}{product:05}")
}

/// Renders a count with `,` thousands separators, e.g. `1234567` as `1,234,567`.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);

    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(digit);
    }

    formatted
}
