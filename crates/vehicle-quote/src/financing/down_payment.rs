use super::issue::QuoteIssue;

pub const DEFAULT_MINIMUM_RATIO: f64 = 0.10;

fn to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}

/// Minimum down payment, rounded up to the next cent.
///
/// Works on whole cents so that prices like 100.10 yield 10.01 and not 10.02.
pub fn minimum_down_payment(vehicle_price: f64, ratio: f64) -> f64 {
    let price_cents = to_cents(vehicle_price.max(0.0));
    let raw = price_cents as f64 * ratio;
    let nearest = raw.round();
    let cents = if (raw - nearest).abs() < 1e-6 {
        nearest
    } else {
        raw.ceil()
    };
    cents / 100.0
}

/// Accepts the down payment when it reaches the minimum or no price is set yet.
pub fn check_down_payment(
    vehicle_price: f64,
    down_payment: f64,
    ratio: f64,
) -> Result<(), QuoteIssue> {
    let minimum = minimum_down_payment(vehicle_price, ratio);
    if vehicle_price <= 0.0 || down_payment >= minimum {
        return Ok(());
    }

    Err(QuoteIssue::DownPaymentTooLow {
        minimum,
        provided: down_payment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_is_ten_percent_rounded_up_to_cents() {
        assert_eq!(minimum_down_payment(60_000.0, DEFAULT_MINIMUM_RATIO), 6_000.0);
        assert_eq!(minimum_down_payment(12_345.67, DEFAULT_MINIMUM_RATIO), 1_234.57);
        assert_eq!(minimum_down_payment(100.10, DEFAULT_MINIMUM_RATIO), 10.01);
        assert_eq!(minimum_down_payment(0.0, DEFAULT_MINIMUM_RATIO), 0.0);
    }

    #[test]
    fn down_payment_at_minimum_is_accepted() {
        assert_eq!(check_down_payment(60_000.0, 6_000.0, DEFAULT_MINIMUM_RATIO), Ok(()));
        assert_eq!(
            check_down_payment(12_345.67, 1_234.57, DEFAULT_MINIMUM_RATIO),
            Ok(())
        );
    }

    #[test]
    fn one_cent_below_minimum_is_rejected() {
        assert_eq!(
            check_down_payment(60_000.0, 5_999.99, DEFAULT_MINIMUM_RATIO),
            Err(QuoteIssue::DownPaymentTooLow {
                minimum: 6_000.0,
                provided: 5_999.99
            })
        );
    }

    #[test]
    fn fractions_of_a_cent_below_minimum_are_rejected() {
        assert_eq!(
            check_down_payment(60_000.0, 5_999.995, DEFAULT_MINIMUM_RATIO),
            Err(QuoteIssue::DownPaymentTooLow {
                minimum: 6_000.0,
                provided: 5_999.995
            })
        );
    }

    #[test]
    fn missing_price_is_not_evaluated() {
        assert_eq!(check_down_payment(0.0, 0.0, DEFAULT_MINIMUM_RATIO), Ok(()));
    }
}
