//! Dining transaction record.

use chrono::{NaiveDate, Utc};

use crate::domain::money::MonetaryAmount;

/// A dining transaction charged to a credit card at a merchant.
///
/// Constructed, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dining {
    pub amount: MonetaryAmount,
    pub credit_card_number: String,
    pub merchant_number: String,
    pub date: NaiveDate,
}

impl Dining {
    /// Creates a dining transaction dated today.
    pub fn new(
        amount: MonetaryAmount,
        credit_card_number: impl Into<String>,
        merchant_number: impl Into<String>,
    ) -> Self {
        Self::on_date(
            amount,
            credit_card_number,
            merchant_number,
            Utc::now().date_naive(),
        )
    }

    /// Creates a dining transaction with an explicit date.
    pub fn on_date(
        amount: MonetaryAmount,
        credit_card_number: impl Into<String>,
        merchant_number: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            credit_card_number: credit_card_number.into(),
            merchant_number: merchant_number.into(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dining_defaults_to_today() {
        let dining = Dining::new(
            "100.00".parse().unwrap(),
            "1234123412341234",
            "1234567890",
        );
        assert_eq!(dining.date, Utc::now().date_naive());
        assert_eq!(dining.amount.to_string(), "100.00");
    }
}
