//! Formatting and display logic
//!
//! Pure functions for formatting record fields for human-readable display.

/// Insert thousands separators into a whole number
///
/// # Examples
/// ```
/// use globetui::logic::formatting::group_thousands;
///
/// assert_eq!(group_thousands(0), "0");
/// assert_eq!(group_thousands(999), "999");
/// assert_eq!(group_thousands(1000), "1,000");
/// assert_eq!(group_thousands(67391582), "67,391,582");
/// ```
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Population for display; "-" when absent
pub fn format_population(population: Option<u64>) -> String {
    population.map(group_thousands).unwrap_or_else(|| "-".to_string())
}

/// Area in km² for display, keeping at most one decimal; "-" when absent
///
/// # Examples
/// ```
/// use globetui::logic::formatting::format_area;
///
/// assert_eq!(format_area(Some(551695.0)), "551,695 km²");
/// assert_eq!(format_area(Some(0.44)), "0.4 km²");
/// assert_eq!(format_area(None), "-");
/// ```
pub fn format_area(area: Option<f64>) -> String {
    let Some(area) = area else {
        return "-".to_string();
    };
    let tenths = (area * 10.0).round() as u64;
    let (whole, frac) = (tenths / 10, tenths % 10);
    if frac == 0 {
        format!("{} km²", group_thousands(whole))
    } else {
        format!("{}.{} km²", group_thousands(whole), frac)
    }
}

/// Join a list field for display; "-" when empty
pub fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Elapsed load time: milliseconds under a second, seconds with one decimal above
pub fn format_elapsed_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.1}s", ms as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands_boundaries() {
        assert_eq!(group_thousands(1), "1");
        assert_eq!(group_thousands(12), "12");
        assert_eq!(group_thousands(123), "123");
        assert_eq!(group_thousands(1234), "1,234");
        assert_eq!(group_thousands(12345), "12,345");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(1_402_112_000), "1,402,112,000");
    }

    #[test]
    fn test_format_population() {
        assert_eq!(format_population(Some(0)), "0");
        assert_eq!(format_population(Some(16425859)), "16,425,859");
        assert_eq!(format_population(None), "-");
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(Some(0.0)), "0 km²");
        assert_eq!(format_area(Some(21.0)), "21 km²");
        assert_eq!(format_area(Some(2.02)), "2 km²");
        assert_eq!(format_area(Some(1284000.0)), "1,284,000 km²");
        assert_eq!(format_area(Some(17098242.5)), "17,098,242.5 km²");
    }

    #[test]
    fn test_format_list() {
        assert_eq!(format_list(&[]), "-");
        assert_eq!(
            format_list(&["Europe".to_string(), "Asia".to_string()]),
            "Europe, Asia"
        );
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed_ms(0), "0ms");
        assert_eq!(format_elapsed_ms(999), "999ms");
        assert_eq!(format_elapsed_ms(1500), "1.5s");
    }
}
