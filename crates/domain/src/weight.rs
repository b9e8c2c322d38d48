use derive_more::{Display, Into};

/// Increment applied by a single tap on the weight controls.
pub const WEIGHT_STEP: f32 = 0.5;

// Every `f32` from 2^23 upwards is an integer.
const INTEGRAL: f32 = 8_388_608.0;

/// Working weight in kilograms.
///
/// A weight is always finite, non-negative and rounded to one decimal place.
#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f32);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);

    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() || value <= 0.0 {
            return Self::ZERO;
        }

        if value >= INTEGRAL {
            return Self(value);
        }

        Self((value * 10.0).round() / 10.0)
    }

    /// Parses user input, accepting `,` as decimal separator and an optional exponent. Input
    /// without a leading number results in zero.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::new(parse_decimal_prefix(text).unwrap_or(0.0))
    }

    #[must_use]
    pub fn adjusted(self, delta: f32) -> Self {
        Self::new(self.0 + delta)
    }
}

fn parse_decimal_prefix(text: &str) -> Option<f32> {
    let text = text.replacen(',', ".", 1);
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits(end);
    end += integer;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits(end + 1);
        end += 1 + fraction;
    }

    if integer + fraction == 0 {
        return None;
    }

    if let Some(b'e' | b'E') = bytes.get(end) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exponent = digits(end + 1 + sign);
        if exponent > 0 {
            end += 1 + sign + exponent;
        }
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(11.0, 11.0)]
    #[case(12.5, 12.5)]
    #[case(12.34, 12.3)]
    #[case(12.36, 12.4)]
    #[case(0.04, 0.0)]
    #[case(-0.5, 0.0)]
    #[case(-100.0, 0.0)]
    #[case(f32::NAN, 0.0)]
    #[case(f32::INFINITY, 0.0)]
    #[case(8_388_609.0, 8_388_609.0)]
    #[case(3.4e38, 3.4e38)]
    #[case(f32::MAX, f32::MAX)]
    fn test_weight_new(#[case] value: f32, #[case] expected: f32) {
        assert_approx_eq!(f32::from(Weight::new(value)), expected);
    }

    #[rstest]
    #[case("12,5", 12.5)]
    #[case("12.5", 12.5)]
    #[case(" 7.25 ", 7.3)]
    #[case("20kg", 20.0)]
    #[case("1,5,5", 1.5)]
    #[case(".5", 0.5)]
    #[case("-3", 0.0)]
    #[case("", 0.0)]
    #[case("kg", 0.0)]
    #[case("-", 0.0)]
    #[case("NaN", 0.0)]
    #[case("inf", 0.0)]
    #[case("1e3", 1000.0)]
    #[case("2.5E-1", 0.3)]
    #[case("1e+2kg", 100.0)]
    #[case("1e", 1.0)]
    #[case("1e-", 1.0)]
    #[case("e3", 0.0)]
    #[case("1.", 1.0)]
    #[case("340000000000000000000000000000000000000", 3.4e38)]
    #[case("1e39", 0.0)]
    fn test_weight_parse(#[case] text: &str, #[case] expected: f32) {
        assert_approx_eq!(f32::from(Weight::parse(text)), expected);
    }

    #[rstest]
    #[case(11.0, WEIGHT_STEP, 11.5)]
    #[case(11.0, -WEIGHT_STEP, 10.5)]
    #[case(0.0, -WEIGHT_STEP, 0.0)]
    #[case(11.0, -100.0, 0.0)]
    #[case(12.3, WEIGHT_STEP, 12.8)]
    #[case(f32::MAX, WEIGHT_STEP, f32::MAX)]
    fn test_weight_adjusted(#[case] value: f32, #[case] delta: f32, #[case] expected: f32) {
        assert_approx_eq!(f32::from(Weight::new(value).adjusted(delta)), expected);
    }

    #[test]
    fn test_weight_adjusted_stays_on_grid() {
        let deltas = [0.5, 0.5, -0.5, 0.1, -3.0, 2.5, -0.5, 0.3, 0.5, -0.7, 10.0];
        let mut weight = Weight::new(1.0);

        for delta in deltas.iter().cycle().take(200) {
            weight = weight.adjusted(*delta);
            let value = f32::from(weight);
            assert!(value >= 0.0);
            assert_approx_eq!(value * 10.0, (value * 10.0).round(), 1e-3);
        }
    }

    #[rstest]
    #[case(3.4e38)]
    #[case(f32::MAX)]
    #[case(8_388_608.5)]
    #[case(12.34)]
    fn test_weight_new_is_finite_and_stable(#[case] value: f32) {
        let weight = Weight::new(value);
        assert!(f32::from(weight).is_finite());
        assert_eq!(Weight::new(f32::from(weight)), weight);
    }

    #[rstest]
    #[case(11.0, "11")]
    #[case(12.5, "12.5")]
    #[case(0.0, "0")]
    fn test_weight_display(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(Weight::new(value).to_string(), expected);
    }
}
