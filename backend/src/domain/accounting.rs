//! Mandate levy arithmetic (Mandatsträgerabgaben).

use serde::{Deserialize, Serialize};

/// Percentage of a mandate holder's allowance owed to the party.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevyRule {
    pub name: String,
    pub description: String,
    pub mandate_type: String,
    pub percentage: f64,
    pub min_amount: f64,
    pub active: bool,
}

impl LevyRule {
    pub fn levy_for(&self, gross_income: f64, deductions: f64) -> f64 {
        levy_amount(gross_income, self.percentage, deductions, self.min_amount)
    }
}

/// `(gross - deductions) * percentage / 100`, raised to `min_amount`,
/// rounded to cents. Never negative.
pub fn levy_amount(gross_income: f64, percentage: f64, deductions: f64, min_amount: f64) -> f64 {
    let base = (gross_income - deductions).max(0.0);
    let levy = (base * percentage / 100.0).max(min_amount).max(0.0);
    round_cents(levy)
}

/// Rate used when no explicit rule matches the mandate.
pub fn default_levy_rate(mandate: &str) -> f64 {
    match mandate {
        "Bürgermeister" => 15.0,
        "Kreistagsmitglied" => 18.0,
        _ => 20.0,
    }
}

pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Splits a gross amount into net and tax for the given VAT rate in percent.
pub fn split_gross(gross: f64, tax_rate: f64) -> (f64, f64) {
    let net = round_cents(gross / (1.0 + tax_rate / 100.0));
    (net, round_cents(gross - net))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn council_levy_is_twenty_percent() {
        assert_eq!(levy_amount(1850.0, default_levy_rate("Ratsmitglied"), 0.0, 50.0), 370.0);
        assert_eq!(levy_amount(2200.0, default_levy_rate("Kreistagsmitglied"), 0.0, 75.0), 396.0);
        assert_eq!(levy_amount(6500.0, default_levy_rate("Bürgermeister"), 0.0, 500.0), 975.0);
    }

    #[test]
    fn minimum_applies_to_small_allowances() {
        assert_eq!(levy_amount(100.0, 20.0, 0.0, 50.0), 50.0);
    }

    #[test]
    fn deductions_never_make_levy_negative() {
        assert_eq!(levy_amount(100.0, 20.0, 500.0, 0.0), 0.0);
    }

    #[test]
    fn vat_split_matches_receipts() {
        assert_eq!(split_gross(450.0, 19.0), (378.15, 71.85));
        assert_eq!(split_gross(385.0, 7.0), (359.81, 25.19));
        assert_eq!(split_gross(285.0, 0.0), (285.0, 0.0));
    }

    #[test]
    fn rule_applies_its_own_minimum() {
        let rule = LevyRule {
            name: "Kreistag-Abgabe".into(),
            description: String::new(),
            mandate_type: "Kreistagsmitglied".into(),
            percentage: 18.0,
            min_amount: 75.0,
            active: true,
        };
        assert_eq!(rule.levy_for(300.0, 0.0), 75.0);
    }
}
