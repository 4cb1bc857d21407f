//! Tests for SVG text formatting.

use super::*;

mod html_escape_tests {
    use super::*;

    #[test]
    fn escapes_ampersand() {
        assert_eq!(html_escape("A & B"), "A &amp; B");
    }

    #[test]
    fn escapes_angle_brackets() {
        assert_eq!(html_escape("<tag>"), "&lt;tag&gt;");
    }

    #[test]
    fn escapes_quotes() {
        assert_eq!(html_escape("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(html_escape("'single'"), "&#39;single&#39;");
    }

    #[test]
    fn leaves_plain_text() {
        assert_eq!(html_escape("Mrs. Cooke"), "Mrs. Cooke");
    }
}

mod format_plain_tests {
    use super::*;

    #[test]
    fn integers_have_no_decimal_point() {
        assert_eq!(format_plain(10.0), "10");
        assert_eq!(format_plain(0.0), "0");
        assert_eq!(format_plain(-0.0), "0");
    }

    #[test]
    fn fractions_are_shortest() {
        assert_eq!(format_plain(0.5), "0.5");
        assert_eq!(format_plain(1.25), "1.25");
    }

    #[test]
    fn float_noise_is_trimmed() {
        assert_eq!(format_plain(0.1 + 0.2), "0.3");
    }

    #[test]
    fn tiny_values_stay_nonzero() {
        assert_eq!(format_plain(1e-11), "0.00000000001");
        assert_eq!(format_plain(2.5e-10), "0.00000000025");
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(format_plain(-0.0), "0");
    }
}

mod format_tick_tests {
    use super::*;

    #[test]
    fn small_values_plain() {
        assert_eq!(format_tick(10.0), "10");
        assert_eq!(format_tick(1.5), "1.5");
        assert_eq!(format_tick(500.0), "500");
    }

    #[test]
    fn thousands_show_k() {
        assert_eq!(format_tick(1000.0), "1k");
        assert_eq!(format_tick(1500.0), "1.5k");
        assert_eq!(format_tick(250_000.0), "250k");
    }

    #[test]
    fn millions_and_billions() {
        assert_eq!(format_tick(2_000_000.0), "2M");
        assert_eq!(format_tick(5_000_000_000.0), "5G");
    }

    #[test]
    fn three_significant_digits() {
        assert_eq!(format_tick(123_456.0), "123k");
    }

    #[test]
    fn rounding_promotes_to_next_suffix() {
        assert_eq!(format_tick(999_960.0), "1M");
    }
}

mod format_total_tests {
    use super::*;

    #[test]
    fn integers_below_thousand_verbatim() {
        assert_eq!(format_total(30.0), "30");
        assert_eq!(format_total(999.0), "999");
    }

    #[test]
    fn fractions_three_significant_digits() {
        assert_eq!(format_total(12.345), "12.3");
    }

    #[test]
    fn large_values_abbreviated() {
        assert_eq!(format_total(12_345.0), "12.3k");
        assert_eq!(format_total(3_000_000_000_000.0), "3T");
    }

    #[test]
    fn tiny_totals_stay_nonzero() {
        assert_eq!(format_total(3e-12), "0.000000000003");
    }
}
