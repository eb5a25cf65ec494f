/// Format an amount already expressed in millions (e.g. €18.3m, -€2.1m)
pub fn format_millions(value: f64) -> String {
    if value < 0.0 {
        format!("-€{:.1}m", value.abs())
    } else {
        format!("€{:.1}m", value)
    }
}

/// Format a change in millions with an explicit sign (e.g. +€3.91m)
pub fn format_delta(value: f64) -> String {
    if value < 0.0 {
        format!("-€{:.2}m", value.abs())
    } else {
        format!("+€{:.2}m", value)
    }
}

/// Format a fraction as a percentage
pub fn format_percentage(value: f64) -> String {
    format!("{:.2}%", value * 100.0)
}

/// Format a discount rate with one decimal (e.g. 5.7%)
pub fn format_rate(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millions() {
        assert_eq!(format_millions(18.316), "€18.3m");
        assert_eq!(format_millions(-2.06), "-€2.1m");
        assert_eq!(format_millions(0.0), "€0.0m");
    }

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(3.912), "+€3.91m");
        assert_eq!(format_delta(-7.8249), "-€7.82m");
    }

    #[test]
    fn test_format_rates() {
        assert_eq!(format_rate(0.057), "5.7%");
        assert_eq!(format_percentage(0.1234), "12.34%");
    }
}
