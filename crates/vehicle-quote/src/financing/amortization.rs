/// Fixed installment repaying `principal` over `periods` at `rate` per period (PMT).
///
/// installment = pv × i × (1 + i)^n / ((1 + i)^n − 1)
///
/// A zero term yields zero and a zero rate splits the principal evenly. The result is
/// not rounded.
pub fn installment(rate: f64, periods: u32, principal: f64) -> f64 {
    if periods == 0 {
        return 0.0;
    }

    let n = f64::from(periods);
    if rate == 0.0 {
        return principal / n;
    }

    let growth = (1.0 + rate).powf(n);
    principal * rate * growth / (growth - 1.0)
}
