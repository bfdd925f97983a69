use chrono::NaiveDate;
use rust_decimal::{Decimal, prelude::ToPrimitive};

const LOWER_TIER: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const UPPER_TIER: Decimal = Decimal::from_parts(100, 0, 0, false, 0);
const UPPER_TIER_RATE: Decimal = Decimal::TWO;

/// Reward points earned for a single purchase.
///
/// One point per whole unit spent above 50 up to 100, then two points per
/// unit above 100. Both tier thresholds are exclusive, so exactly 50 earns
/// nothing and exactly 100 earns 50. Each tier's points are floored toward
/// negative infinity after doubling, so 150.75 earns 50 + 101.
pub fn calculate_points(amount: Decimal) -> i64 {
    if amount > UPPER_TIER {
        (amount - UPPER_TIER)
            .checked_mul(UPPER_TIER_RATE)
            .map(|upper| to_points(upper.floor()))
            .unwrap_or(i64::MAX)
            .saturating_add(50)
    } else if amount > LOWER_TIER {
        to_points((amount - LOWER_TIER).floor())
    } else {
        0
    }
}

/// Upper-case English month name of `date`, e.g. `"JULY"`. The year is not
/// part of the label.
pub fn month_label(date: NaiveDate) -> String {
    date.format("%B").to_string().to_uppercase()
}

fn to_points(value: Decimal) -> i64 {
    value.to_i64().unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn nothing_at_or_below_fifty() {
        for amount in [dec!(-20), dec!(0), dec!(0.01), dec!(45.0), dec!(49.99), dec!(50), dec!(50.00)] {
            assert_eq!(calculate_points(amount), 0, "amount {amount}");
        }
    }

    #[test]
    fn middle_tier() {
        assert_eq!(calculate_points(dec!(75.0)), 25);
        assert_eq!(calculate_points(dec!(50.01)), 0);
        assert_eq!(calculate_points(dec!(51)), 1);
        assert_eq!(calculate_points(dec!(75.99)), 25);
    }

    #[test]
    fn exactly_one_hundred_stays_in_middle_tier() {
        assert_eq!(calculate_points(dec!(100.0)), 50);
    }

    #[test]
    fn upper_tier() {
        assert_eq!(calculate_points(dec!(120.0)), 90);
        assert_eq!(calculate_points(dec!(100.01)), 50);
        assert_eq!(calculate_points(dec!(100.50)), 51);
        assert_eq!(calculate_points(dec!(120.99)), 91);
        assert_eq!(calculate_points(dec!(200)), 250);
    }

    #[test]
    fn huge_amounts_saturate() {
        assert_eq!(calculate_points(Decimal::MAX), i64::MAX);
    }

    #[test]
    fn monotonic_in_amount() {
        let mut previous = i64::MIN;
        let mut amount = dec!(-5.00);

        while amount <= dec!(250.00) {
            let points = calculate_points(amount);
            assert!(points >= previous, "points dropped at {amount}");
            previous = points;
            amount += dec!(0.25);
        }
    }

    #[test]
    fn month_label_ignores_year() {
        let july_2024 = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let july_2025 = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();

        assert_eq!(month_label(july_2024), "JULY");
        assert_eq!(month_label(july_2025), "JULY");
        assert_eq!(
            month_label(NaiveDate::from_ymd_opt(2025, 2, 14).unwrap()),
            "FEBRUARY"
        );
    }
}
