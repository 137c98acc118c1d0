/// Computes the median of a slice of values. Returns `None` for empty input.
///
/// Odd count: the middle element after sorting. Even count: the arithmetic
/// mean of the two central elements.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_median_single() {
        assert_eq!(median(&[7.0]), Some(7.0));
    }

    #[test]
    fn test_median_odd_count() {
        assert_eq!(median(&[9.0, 1.0, 5.0]), Some(5.0));
    }

    #[test]
    fn test_median_even_count() {
        assert_eq!(median(&[5.0, 7.0]), Some(6.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_median_is_order_independent() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), median(&[2.0, 3.0, 1.0]));
    }

    #[test]
    fn test_median_negative_values() {
        assert_eq!(median(&[-2.0, -5.0, 0.0]), Some(-2.0));
    }
}
