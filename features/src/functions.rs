//! Named functions and closures.

use serde::Serialize;

#[must_use]
pub fn traditional_add(a: i64, b: i64) -> i64 {
    a + b
}

/// Closure form of [`traditional_add`]; same result.
#[must_use]
pub fn arrow_add(a: i64, b: i64) -> i64 {
    let add = |a: i64, b: i64| a + b;
    add(a, b)
}

#[must_use]
pub fn double(x: i64) -> i64 {
    let double = |x| x * 2;
    double(x)
}

#[must_use]
pub fn greet() -> &'static str {
    "你好！"
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Calculation {
    pub sum: i64,
    pub product: i64,
}

#[must_use]
pub fn calculate(a: i64, b: i64) -> Calculation {
    let sum = a + b;
    let product = a * b;
    Calculation { sum, product }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_and_function_agree() {
        assert_eq!(traditional_add(2, 3), 5);
        assert_eq!(arrow_add(2, 3), traditional_add(2, 3));
        assert_eq!(double(21), 42);
        assert_eq!(greet(), "你好！");
    }

    #[test]
    fn calculate_returns_both_results() {
        assert_eq!(calculate(3, 4), Calculation { sum: 7, product: 12 });
        let json = serde_json::to_value(calculate(2, 5)).unwrap();
        assert_eq!(json, serde_json::json!({ "sum": 7, "product": 10 }));
    }
}
