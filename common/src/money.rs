//! 金額計算
//!
//! 浮動小数点の誤差を避けるため、合計計算は rust_decimal で行い、
//! 結果を小数2桁に丸めて f64 に戻す。

use crate::types::CartLine;
use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Decimal で表せる金額か（範囲外・NaN・無限大は false）
pub fn is_representable(value: f64) -> bool {
    Decimal::from_f64(value).is_some()
}

/// 小数2桁に丸めて f64 に戻す
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// 単価 × 数量
pub fn line_total(price: f64, quantity: u32) -> f64 {
    to_f64(to_decimal(price) * Decimal::from(quantity))
}

/// カート行の合計
pub fn sum_lines(lines: &[CartLine]) -> f64 {
    let total: Decimal = lines
        .iter()
        .map(|line| to_decimal(line.item.price) * Decimal::from(line.quantity))
        .sum();
    to_f64(total)
}

/// 2つの金額の加算
pub fn add(a: f64, b: f64) -> f64 {
    to_f64(to_decimal(a) + to_decimal(b))
}

/// 表示用フォーマット（例: "¥120", "¥12.50"）
pub fn format_price(symbol: &str, amount: f64) -> String {
    let rounded = to_decimal(amount).round_dp(DECIMAL_PLACES);
    if rounded.fract().is_zero() {
        format!("{}{}", symbol, rounded.trunc())
    } else {
        format!("{}{:.2}", symbol, rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MenuItem;

    #[test]
    fn test_is_representable() {
        assert!(is_representable(0.0));
        assert!(is_representable(12.5));
        assert!(is_representable(1e20));
        assert!(!is_representable(1e29));
        assert!(!is_representable(f64::NAN));
        assert!(!is_representable(f64::INFINITY));
    }

    fn line(price: f64, quantity: u32) -> CartLine {
        CartLine {
            item: MenuItem {
                id: 1,
                name: "test".to_string(),
                price,
                image: String::new(),
                categories: vec![],
                description: String::new(),
            },
            quantity,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line_total(80.0, 1), 80.0);
        assert_eq!(line_total(20.0, 2), 40.0);
        assert_eq!(line_total(0.1, 3), 0.3);
    }

    #[test]
    fn test_sum_lines_no_float_drift() {
        let lines = vec![line(0.1, 1), line(0.2, 1)];
        assert_eq!(sum_lines(&lines), 0.3);
    }

    #[test]
    fn test_sum_lines_empty() {
        assert_eq!(sum_lines(&[]), 0.0);
    }

    #[test]
    fn test_add() {
        assert_eq!(add(120.0, 20.0), 140.0);
        assert_eq!(add(0.1, 0.2), 0.3);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("¥", 120.0), "¥120");
        assert_eq!(format_price("$", 12.5), "$12.50");
        assert_eq!(format_price("¥", 0.0), "¥0");
    }
}
