//! Record types shown by the dashboard pages.

pub mod customer;
pub mod employee;
pub mod invoice;
pub mod payment;

pub use customer::{Customer, CustomerStatus};
pub use employee::Employee;
pub use invoice::{Invoice, InvoiceStatus};
pub use payment::{Payment, PaymentMethod};

/// Format an amount held in cents as `1,234.56`.
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    let whole = (cents / 100).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}{grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(0), "0.00");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(123_456), "1,234.56");
        assert_eq!(format_amount(100_000_000), "1,000,000.00");
        assert_eq!(format_amount(-2_550), "-25.50");
    }
}
