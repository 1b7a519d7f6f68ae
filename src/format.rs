/// Formats a sample value. Very large or very small magnitudes switch to
/// scientific notation; trailing zeros are dropped.
pub fn format_number(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    if x.abs() > 1e10 || (x.abs() < 1e-5 && x != 0.0) {
        format!("{:.*e}", precision, x)
    } else {
        let s = format!("{:.*}", precision, x);
        let s = if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            &s
        };
        if s == "-0" {
            "0".to_string()
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(format_number(2.5, 6), "2.5");
        assert_eq!(format_number(3.0, 6), "3");
        assert_eq!(format_number(-0.0, 6), "0");
        assert_eq!(format_number(1.0 / 3.0, 3), "0.333");
        assert_eq!(format_number(1e12, 2), "1.00e12");
        assert_eq!(format_number(f64::NAN, 6), "nan");
        assert_eq!(format_number(f64::NEG_INFINITY, 6), "-inf");
        assert_eq!(format_number(120.0, 0), "120");
    }
}
