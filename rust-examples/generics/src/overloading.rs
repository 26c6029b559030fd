//! Overloading through traits
//!
//! Rust has no ad-hoc overloading: one name, one function. The same effect,
//! "one name, an implementation per type", comes from a trait with an impl
//! for each type. The generic function then states the one capability it
//! needs, `T: Raise`, and nothing more.

use playground_common::Transcript;

pub trait Raise: Sized {
    fn raise(self, exponent: Self) -> Self;
}

impl Raise for f64 {
    fn raise(self, exponent: Self) -> Self {
        self.powf(exponent)
    }
}

impl Raise for f32 {
    fn raise(self, exponent: Self) -> Self {
        self.powf(exponent)
    }
}

impl Raise for u64 {
    /// Saturates at `u64::MAX`; exponents beyond `u32::MAX` always saturate
    /// unless the base is 0 or 1.
    fn raise(self, exponent: Self) -> Self {
        match u32::try_from(exponent) {
            Ok(exponent) => self.saturating_pow(exponent),
            Err(_) if self <= 1 => self,
            Err(_) => u64::MAX,
        }
    }
}

/// `base` to the power `exponent`, for any type that knows how.
///
/// # Example
/// ```
/// use playground_generics::overloading::raise;
///
/// assert_eq!(raise(2.0_f64, 10.0), 1024.0);
/// assert_eq!(raise(2.0_f32, 3.0), 8.0);
/// assert_eq!(raise(3_u64, 4), 81);
/// ```
pub fn raise<T: Raise>(base: T, exponent: T) -> T {
    base.raise(exponent)
}

/// Raises every base to the same exponent.
pub fn raise_all<T: Raise + Copy>(bases: &[T], exponent: T) -> Vec<T> {
    playground_common::sequence::map(bases, |b| raise(*b, exponent))
}

pub fn tour() -> Transcript {
    let mut t = Transcript::new("Overloading");
    t.record("2.0_f64 ^ 10.0", &raise(2.0_f64, 10.0));
    t.record("2.0_f32 ^ 3.0", &raise(2.0_f32, 3.0));
    t.record("3_u64 ^ 4", &raise(3_u64, 4));
    t.record("squares", &raise_all(&[1.5_f64, 2.0, 2.5], 2.0));
    t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raise_picks_impl_by_type() {
        let double: f64 = raise(2.0, 0.5);
        assert!((double - std::f64::consts::SQRT_2).abs() < 1e-12);

        let single: f32 = raise(2.0, 0.5);
        assert!((single - std::f32::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn test_integer_raise_saturates() {
        assert_eq!(raise(10_u64, 3), 1000);
        assert_eq!(raise(2_u64, 64), u64::MAX);
        assert_eq!(raise(1_u64, u64::MAX), 1);
        assert_eq!(raise(0_u64, u64::MAX), 0);
        assert_eq!(raise(2_u64, u64::MAX), u64::MAX);
    }

    #[test]
    fn test_raise_all() {
        assert_eq!(raise_all(&[1_u64, 2, 3], 2), vec![1, 4, 9]);
    }
}
