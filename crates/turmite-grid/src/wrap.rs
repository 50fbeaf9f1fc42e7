//! Modular coordinate arithmetic shared by grid lookups and movement.

/// Wrap a signed axis value into `[0, len)`.
///
/// `len` must be non-zero; [`Grid`](crate::Grid) construction guarantees it.
#[inline]
pub fn wrap_axis(val: i64, len: u32) -> u32 {
    val.rem_euclid(len as i64) as u32
}

/// Signed wrapped distance from `a` to `b` along one axis: the shortest
/// displacement, preferring the positive direction on ties.
pub fn axis_delta(a: u32, b: u32, len: u32) -> i64 {
    let n = len as i64;
    let d = (b as i64 - a as i64).rem_euclid(n);
    if d * 2 > n {
        d - n
    } else {
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn in_range_is_identity() {
        assert_eq!(wrap_axis(0, 5), 0);
        assert_eq!(wrap_axis(4, 5), 4);
    }

    #[test]
    fn negative_wraps_to_far_edge() {
        assert_eq!(wrap_axis(-1, 60), 59);
        assert_eq!(wrap_axis(-61, 60), 59);
    }

    #[test]
    fn overflow_wraps_to_near_edge() {
        assert_eq!(wrap_axis(60, 60), 0);
        assert_eq!(wrap_axis(125, 60), 5);
    }

    #[test]
    fn single_cell_axis() {
        assert_eq!(wrap_axis(-7, 1), 0);
        assert_eq!(wrap_axis(9, 1), 0);
    }

    #[test]
    fn delta_takes_short_way_round() {
        assert_eq!(axis_delta(0, 59, 60), -1);
        assert_eq!(axis_delta(59, 0, 60), 1);
        assert_eq!(axis_delta(10, 14, 60), 4);
        assert_eq!(axis_delta(0, 30, 60), 30);
    }

    proptest! {
        #[test]
        fn wrapped_value_in_range(val in any::<i64>(), len in 1u32..10_000) {
            let w = wrap_axis(val, len);
            prop_assert!(w < len);
        }

        #[test]
        fn wrap_is_periodic(val in -1_000_000i64..1_000_000, len in 1u32..500, k in -20i64..20) {
            prop_assert_eq!(wrap_axis(val, len), wrap_axis(val + k * len as i64, len));
        }

        #[test]
        fn delta_round_trips(a in 0u32..200, b in 0u32..200, len in 200u32..400) {
            let d = axis_delta(a, b, len);
            prop_assert_eq!(wrap_axis(a as i64 + d, len), b);
            prop_assert!(d.abs() * 2 <= len as i64);
        }
    }
}
