//! Bounded numeric draws free of modulo and rounding bias.
//!
//! Integer draws delegate to [`Rng::random_range`], which rejects
//! out-of-range words instead of reducing them modulo the span. Spans too
//! wide for the native integer type fall back to rejection sampling over
//! full-width words; because such a span covers more than half of all
//! words, the expected number of draws is below two.
//!
//! Real draws scale a uniform `[0, 1)` value into `[min, max)` and clamp
//! the rare result that rounds up to `max` onto the next smaller float.

use crate::error::{EvoError, Result};
use rand::Rng;
use std::ops::Range;

/// Uniform `i32` in `[origin, bound)`.
///
/// # Errors
/// Returns [`EvoError::EmptyInterval`] if `origin >= bound`.
pub fn next_int<R: Rng + ?Sized>(origin: i32, bound: i32, rng: &mut R) -> Result<i32> {
    if origin >= bound {
        return Err(EvoError::EmptyInterval {
            origin: origin.into(),
            bound: bound.into(),
        });
    }
    Ok(draw_int(origin, bound, rng))
}

/// Uniform `i32` in `range`.
///
/// A range holding exactly one value returns it without touching the
/// generator.
///
/// # Errors
/// Returns [`EvoError::EmptyInterval`] if the range is empty.
pub fn next_int_in<R: Rng + ?Sized>(range: Range<i32>, rng: &mut R) -> Result<i32> {
    if range.start.checked_add(1) == Some(range.end) {
        return Ok(range.start);
    }
    next_int(range.start, range.end, rng)
}

/// Uniform `i64` in `[origin, bound)`.
///
/// # Errors
/// Returns [`EvoError::EmptyInterval`] if `origin >= bound`.
pub fn next_long<R: Rng + ?Sized>(origin: i64, bound: i64, rng: &mut R) -> Result<i64> {
    if origin >= bound {
        return Err(EvoError::EmptyInterval { origin, bound });
    }

    let n = bound.wrapping_sub(origin);
    if n > 0 {
        return Ok(rng.random_range(0..n) + origin);
    }
    loop {
        let r: i64 = rng.random();
        if r >= origin && r < bound {
            return Ok(r);
        }
    }
}

/// Uniform over every `i8` value.
pub fn next_byte<R: Rng + ?Sized>(rng: &mut R) -> i8 {
    draw_int(i8::MIN.into(), i32::from(i8::MAX) + 1, rng) as i8
}

/// Uniform over every `i16` value.
pub fn next_short<R: Rng + ?Sized>(rng: &mut R) -> i16 {
    draw_int(i16::MIN.into(), i32::from(i16::MAX) + 1, rng) as i16
}

/// Random alphanumeric character from the basic multilingual plane.
///
/// Code points are drawn uniformly from `[0, 0xFFFF]` until one is an
/// alphanumeric scalar value. Most of the plane qualifies, so only a
/// couple of draws are needed on average.
pub fn next_char<R: Rng + ?Sized>(rng: &mut R) -> char {
    loop {
        let code = draw_int(0, 0x1_0000, rng) as u32;
        if let Some(c) = char::from_u32(code) {
            if c.is_alphanumeric() {
                return c;
            }
        }
    }
}

/// Uniform `f32` in `[min, max)`.
///
/// # Errors
/// Returns [`EvoError::InvalidFloatInterval`] unless `min < max` and both
/// bounds are finite.
pub fn next_float<R: Rng + ?Sized>(min: f32, max: f32, rng: &mut R) -> Result<f32> {
    if !(min < max) || !min.is_finite() || !max.is_finite() {
        return Err(EvoError::InvalidFloatInterval {
            min: min.into(),
            max: max.into(),
        });
    }

    let u = rng.random::<f32>();
    let span = max - min;
    // A span above f32::MAX is scaled per bound so that u = 0 still gives min.
    let value = if span.is_finite() {
        u * span + min
    } else {
        u * max - u * min + min
    };
    Ok(if value >= max { below_f32(max) } else { value })
}

/// Uniform `f64` in `[min, max)`.
///
/// # Errors
/// Returns [`EvoError::InvalidFloatInterval`] unless `min < max` and both
/// bounds are finite.
pub fn next_double<R: Rng + ?Sized>(min: f64, max: f64, rng: &mut R) -> Result<f64> {
    if !(min < max) || !min.is_finite() || !max.is_finite() {
        return Err(EvoError::InvalidFloatInterval { min, max });
    }

    let u = rng.random::<f64>();
    let span = max - min;
    let value = if span.is_finite() {
        u * span + min
    } else {
        u * max - u * min + min
    };
    Ok(if value >= max { below_f64(max) } else { value })
}

/// String of `length` printable ASCII characters (codes `32..127`).
pub fn next_ascii_string_of_length<R: Rng + ?Sized>(length: usize, rng: &mut R) -> String {
    (0..length)
        .map(|_| char::from(draw_int(32, 127, rng) as u8))
        .collect()
}

/// Printable ASCII string whose length is uniform in `[5, 20)`.
pub fn next_ascii_string<R: Rng + ?Sized>(rng: &mut R) -> String {
    let length = draw_int(5, 20, rng) as usize;
    next_ascii_string_of_length(length, rng)
}

/// Returns `k` distinct indices from `[0, n)` in ascending order.
///
/// # Errors
/// Returns [`EvoError::SubsetTooLarge`] if `k > n`.
pub fn subset<R: Rng + ?Sized>(n: usize, k: usize, rng: &mut R) -> Result<Vec<usize>> {
    if k > n {
        return Err(EvoError::SubsetTooLarge { n, k });
    }
    let mut indices = rand::seq::index::sample(rng, n, k).into_vec();
    indices.sort_unstable();
    Ok(indices)
}

/// Draw for a pre-validated, non-empty interval.
fn draw_int<R: Rng + ?Sized>(origin: i32, bound: i32, rng: &mut R) -> i32 {
    let n = bound.wrapping_sub(origin);
    if n > 0 {
        return rng.random_range(0..n) + origin;
    }
    loop {
        let r: i32 = rng.random();
        if r >= origin && r < bound {
            return r;
        }
    }
}

/// Largest `f32` strictly below `x`.
fn below_f32(x: f32) -> f32 {
    if x > 0.0 {
        f32::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f32::from_bits(1)
    } else {
        f32::from_bits(x.to_bits() + 1)
    }
}

/// Largest `f64` strictly below `x`.
fn below_f64(x: f64) -> f64 {
    if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else if x == 0.0 {
        -f64::from_bits(1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::random::testing::{ConstRng, PanicRng};
    use std::collections::HashSet;

    // ---- Integers ----

    #[test]
    fn test_next_int_bounds() {
        let mut rng = create_rng(42);
        let intervals = [
            (0, 1),
            (-5, 5),
            (10, 1000),
            (-1_000_000, -999_990),
            (i32::MIN, i32::MIN + 3),
            (i32::MAX - 3, i32::MAX),
            (i32::MIN, 0),
            (-1, i32::MAX),
        ];
        for (origin, bound) in intervals {
            for _ in 0..10_000 {
                let v = next_int(origin, bound, &mut rng).unwrap();
                assert!(v >= origin && v < bound, "{v} not in [{origin}, {bound})");
            }
        }
    }

    #[test]
    fn test_next_int_overflowing_span() {
        // Span exceeds i32::MAX and takes the rejection path.
        let mut rng = create_rng(7);
        let mut negative = false;
        let mut positive = false;
        for _ in 0..10_000 {
            let v = next_int(i32::MIN, i32::MAX, &mut rng).unwrap();
            assert!(v < i32::MAX);
            negative |= v < 0;
            positive |= v > 0;
        }
        assert!(negative && positive);
    }

    #[test]
    fn test_next_int_uniformity() {
        let mut rng = create_rng(12345);
        let buckets = 10usize;
        let samples = 100_000usize;
        let mut counts = vec![0usize; buckets];
        for _ in 0..samples {
            counts[next_int(0, buckets as i32, &mut rng).unwrap() as usize] += 1;
        }

        let expected = samples as f64 / buckets as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = c as f64 - expected;
                d * d / expected
            })
            .sum();
        // 9 degrees of freedom; 27.88 is the 0.999 quantile.
        assert!(chi2 < 27.88, "chi-square too large: {chi2}, counts: {counts:?}");
    }

    #[test]
    fn test_next_int_empty_interval() {
        let mut rng = create_rng(1);
        assert_eq!(
            next_int(3, 3, &mut rng),
            Err(EvoError::EmptyInterval {
                origin: 3,
                bound: 3
            })
        );
        assert!(next_int(4, 3, &mut rng).is_err());
    }

    #[test]
    fn test_next_int_in_singleton_uses_no_randomness() {
        assert_eq!(next_int_in(17..18, &mut PanicRng), Ok(17));
        assert_eq!(next_int_in(i32::MAX - 1..i32::MAX, &mut PanicRng), Ok(i32::MAX - 1));
        assert_eq!(next_int_in(-3..-2, &mut PanicRng), Ok(-3));
    }

    #[test]
    fn test_next_int_in_range() {
        let mut rng = create_rng(3);
        for _ in 0..1000 {
            let v = next_int_in(-2..4, &mut rng).unwrap();
            assert!((-2..4).contains(&v));
        }
        assert!(next_int_in(5..5, &mut rng).is_err());
    }

    #[test]
    fn test_next_long_bounds() {
        let mut rng = create_rng(5);
        for _ in 0..10_000 {
            let v = next_long(-1 << 40, 1 << 40, &mut rng).unwrap();
            assert!((-1 << 40..1 << 40).contains(&v));
            let w = next_long(i64::MIN, i64::MAX, &mut rng).unwrap();
            assert!(w < i64::MAX);
        }
        assert!(next_long(0, 0, &mut rng).is_err());
    }

    #[test]
    fn test_next_byte_and_short_cover_signs() {
        let mut rng = create_rng(11);
        let bytes: Vec<i8> = (0..1000).map(|_| next_byte(&mut rng)).collect();
        assert!(bytes.iter().any(|&b| b < 0));
        assert!(bytes.iter().any(|&b| b > 0));

        let shorts: Vec<i16> = (0..1000).map(|_| next_short(&mut rng)).collect();
        assert!(shorts.iter().any(|&s| s < -1000));
        assert!(shorts.iter().any(|&s| s > 1000));
    }

    #[test]
    fn test_next_char_is_alphanumeric() {
        let mut rng = create_rng(21);
        for _ in 0..10_000 {
            let c = next_char(&mut rng);
            assert!(c.is_alphanumeric(), "{c:?}");
            assert!((c as u32) <= 0xFFFF);
        }
    }

    // ---- Reals ----

    #[test]
    fn test_next_double_half_open() {
        let mut rng = create_rng(42);
        for _ in 0..100_000 {
            let v = next_double(-2.5, 7.25, &mut rng).unwrap();
            assert!((-2.5..7.25).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_next_float_half_open() {
        let mut rng = create_rng(43);
        for _ in 0..100_000 {
            let v = next_float(0.1, 0.2, &mut rng).unwrap();
            assert!((0.1..0.2).contains(&v), "{v}");
        }
    }

    #[test]
    fn test_boundary_generator_output_stays_below_max() {
        // The all-ones word maps to the largest value below 1.0.
        let mut rng = ConstRng(u64::MAX);
        for (min, max) in [(1.0, 3.0), (0.0, 1.0), (-3.0, -1.0), (-1.0, 0.0), (1e300, 1.5e300)] {
            let v = next_double(min, max, &mut rng).unwrap();
            assert!(v >= min && v < max, "{v} not in [{min}, {max})");
        }
        for (min, max) in [(1.0f32, 3.0f32), (0.0, 1.0), (-3.0, -1.0), (-1.0, 0.0)] {
            let v = next_float(min, max, &mut rng).unwrap();
            assert!(v >= min && v < max, "{v} not in [{min}, {max})");
        }
    }

    #[test]
    fn test_lower_bound_reachable() {
        let mut rng = ConstRng(0);
        assert_eq!(next_double(2.0, 3.0, &mut rng), Ok(2.0));
        assert_eq!(next_float(-4.0, 3.0, &mut rng), Ok(-4.0));
    }

    #[test]
    fn test_invalid_real_intervals() {
        let mut rng = create_rng(1);
        assert!(next_double(1.0, 1.0, &mut rng).is_err());
        assert!(next_double(2.0, 1.0, &mut rng).is_err());
        assert!(next_double(f64::NAN, 1.0, &mut rng).is_err());
        assert!(next_float(0.0, f32::NAN, &mut rng).is_err());
        assert!(next_double(0.0, f64::INFINITY, &mut rng).is_err());
        assert!(next_double(f64::NEG_INFINITY, 0.0, &mut rng).is_err());
        assert!(next_float(f32::NEG_INFINITY, f32::INFINITY, &mut rng).is_err());
    }

    #[test]
    fn test_overflowing_span_stays_finite() {
        // max - min exceeds the largest finite value for these bounds.
        let mut low = ConstRng(0);
        assert_eq!(next_double(-f64::MAX, f64::MAX, &mut low), Ok(-f64::MAX));
        assert_eq!(next_float(-f32::MAX, f32::MAX, &mut low), Ok(-f32::MAX));

        let mut high = ConstRng(u64::MAX);
        let v = next_double(-f64::MAX, f64::MAX, &mut high).unwrap();
        assert!(v.is_finite() && v < f64::MAX, "{v}");
        let v = next_float(-f32::MAX, f32::MAX, &mut high).unwrap();
        assert!(v.is_finite() && v < f32::MAX, "{v}");

        let mut rng = create_rng(8);
        for _ in 0..10_000 {
            let v = next_double(-f64::MAX, f64::MAX, &mut rng).unwrap();
            assert!(!v.is_nan() && v >= -f64::MAX && v < f64::MAX, "{v}");
            let v = next_float(-f32::MAX, f32::MAX, &mut rng).unwrap();
            assert!(!v.is_nan() && v >= -f32::MAX && v < f32::MAX, "{v}");
        }
    }

    #[test]
    fn test_below_helpers() {
        assert_eq!(below_f64(1.0), 1.0 - f64::EPSILON / 2.0);
        assert!(below_f64(-1.0) < -1.0);
        assert!(below_f64(0.0) < 0.0);
        assert!(below_f64(-0.0) < 0.0);
        assert_eq!(below_f32(1.0), 1.0 - f32::EPSILON / 2.0);
        assert!(below_f32(-2.0) < -2.0);
        assert_eq!(below_f64(f64::INFINITY), f64::MAX);
    }

    // ---- Strings ----

    #[test]
    fn test_ascii_string() {
        let mut rng = create_rng(8);
        let s = next_ascii_string_of_length(200, &mut rng);
        assert_eq!(s.len(), 200);
        assert!(s.bytes().all(|b| (32..127).contains(&b)));

        for _ in 0..100 {
            let s = next_ascii_string(&mut rng);
            assert!((5..20).contains(&s.len()));
        }
    }

    // ---- Subsets ----

    #[test]
    fn test_subset_distinct_sorted() {
        let mut rng = create_rng(42);
        for k in 0..=10 {
            let s = subset(10, k, &mut rng).unwrap();
            assert_eq!(s.len(), k);
            assert!(s.windows(2).all(|w| w[0] < w[1]));
            assert!(s.iter().all(|&i| i < 10));
        }
        assert_eq!(subset(5, 5, &mut rng).unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_subset_covers_domain() {
        let mut rng = create_rng(2);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            seen.extend(subset(20, 3, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_subset_too_large() {
        let mut rng = create_rng(1);
        assert_eq!(
            subset(3, 4, &mut rng),
            Err(EvoError::SubsetTooLarge { n: 3, k: 4 })
        );
    }
}
