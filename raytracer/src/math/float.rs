pub trait FloatAsExt {
    /// Returns `Some(self)` if `self` is further than `eps` from zero, else `None`.
    /// The returned value is guaranteed to be usable as a divisor.
    ///
    /// Returns `None` for NaN and `Some(self)` for +/- infinity
    fn into_non_zero(self, eps: Self) -> Option<f32>;
}

impl FloatAsExt for f32 {
    fn into_non_zero(self, eps: Self) -> Option<f32> {
        (self.abs() > eps).then_some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::FloatAsExt;

    #[test]
    fn into_non_zero_test() {
        assert_eq!(0.0.into_non_zero(0.1), None);
        assert_eq!(1.0.into_non_zero(0.1), Some(1.0));
        assert_eq!((-0.01).into_non_zero(0.1), None);
        assert_eq!((-1.0).into_non_zero(0.1), Some(-1.0));
        assert_eq!(f32::NAN.into_non_zero(0.1), None);
        assert_eq!(f32::INFINITY.into_non_zero(0.1), Some(f32::INFINITY));
    }
}
