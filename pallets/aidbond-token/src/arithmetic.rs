//! Overflow-checked balance arithmetic.
//!
//! Every balance, supply and allowance update in the pallet goes through these two
//! functions. They never wrap or saturate.

use crate::{Config, Error};
use sp_runtime::traits::{CheckedAdd, CheckedSub};

/// `a + b`, or [`Error::ArithmeticOverflow`] if the sum does not fit in `T::Balance`.
pub fn checked_add<T: Config>(a: T::Balance, b: T::Balance) -> Result<T::Balance, Error<T>> {
    a.checked_add(&b).ok_or(Error::<T>::ArithmeticOverflow)
}

/// `a - b`, or [`Error::ArithmeticUnderflow`] if `b > a`.
pub fn checked_sub<T: Config>(a: T::Balance, b: T::Balance) -> Result<T::Balance, Error<T>> {
    a.checked_sub(&b).ok_or(Error::<T>::ArithmeticUnderflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::Test;

    #[test]
    fn add_within_range() {
        assert!(matches!(checked_add::<Test>(20, 22), Ok(42)));
        assert!(matches!(checked_add::<Test>(u128::MAX - 1, 1), Ok(u128::MAX)));
    }

    #[test]
    fn add_past_max_fails() {
        assert!(matches!(checked_add::<Test>(u128::MAX, 1), Err(Error::<Test>::ArithmeticOverflow)));
    }

    #[test]
    fn sub_within_range() {
        assert!(matches!(checked_sub::<Test>(42, 42), Ok(0)));
        assert!(matches!(checked_sub::<Test>(42, 2), Ok(40)));
    }

    #[test]
    fn sub_below_zero_fails() {
        assert!(matches!(checked_sub::<Test>(0, 1), Err(Error::<Test>::ArithmeticUnderflow)));
        assert!(matches!(checked_sub::<Test>(19, 20), Err(Error::<Test>::ArithmeticUnderflow)));
    }
}
