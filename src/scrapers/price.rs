/// Normalize a price label such as `"11.200 €"` into whole euros.
///
/// Periods are thousands separators and are dropped; every remaining digit
/// run is concatenated, so `"9 990"` reads as `9990`. Text without digits
/// yields `None`, never zero.
pub fn parse_price(text: &str) -> Option<u64> {
    let digits: String = text
        .replace('.', "")
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    if digits.is_empty() {
        return None;
    }

    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price_thousands_separator() {
        assert_eq!(parse_price("11.200 €"), Some(11200));
        assert_eq!(parse_price("1.250.000 €"), Some(1_250_000));
    }

    #[test]
    fn test_parse_price_space_separated_runs() {
        assert_eq!(parse_price("9 990"), Some(9990));
        assert_eq!(parse_price("12 990 € Negociável"), Some(12990));
    }

    #[test]
    fn test_parse_price_without_digits() {
        assert_eq!(parse_price("sem preço"), None);
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("Troca"), None);
    }

    #[test]
    fn test_parse_price_zero_is_kept() {
        assert_eq!(parse_price("0 €"), Some(0));
    }

    #[test]
    fn test_parse_price_overflow() {
        assert_eq!(parse_price("999999999999999999999999 €"), None);
    }
}
