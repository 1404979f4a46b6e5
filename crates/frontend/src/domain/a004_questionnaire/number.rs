//! Client-side validation of numeric answers.

use crate::shared::error::{AppError, AppResult};

pub const DEFAULT_ERROR_TEXT: &str = "Invalid input";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberKind {
    Integer,
    #[default]
    Float,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberConstraints {
    pub kind: NumberKind,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub error_text: String,
}

impl Default for NumberConstraints {
    fn default() -> Self {
        Self {
            kind: NumberKind::Float,
            min: None,
            max: None,
            error_text: DEFAULT_ERROR_TEXT.to_string(),
        }
    }
}

/// Optional sign followed by digits only. The empty string qualifies.
fn is_integer_text(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    digits.chars().all(|c| c.is_ascii_digit())
}

/// Rejects the spellings `f64::from_str` accepts beyond plain numerals
/// (`inf`, `INFINITY`, `nan`); only the exact word `Infinity` is allowed.
fn is_float_spelling(text: &str) -> bool {
    let unsigned = text.strip_prefix(['-', '+']).unwrap_or(text);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return unsigned == "Infinity";
    }
    true
}

impl NumberConstraints {
    /// `Ok(None)` is an integer entry with no digits yet (nothing to bound).
    pub fn validate(&self, text: &str) -> AppResult<Option<f64>> {
        let value = match self.kind {
            NumberKind::Integer => {
                if !is_integer_text(text) {
                    return Err(self.error());
                }
                match text.parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => return Ok(None),
                }
            }
            NumberKind::Float => {
                if text.trim().is_empty() {
                    return Err(self.error());
                }
                let trimmed = text.trim();
                if !is_float_spelling(trimmed) {
                    return Err(self.error());
                }
                match trimmed.parse::<f64>() {
                    Ok(v) if !v.is_nan() => v,
                    _ => return Err(self.error()),
                }
            }
        };

        let below = self.min.is_some_and(|min| value < min);
        let above = self.max.is_some_and(|max| value > max);
        if below || above {
            return Err(self.error());
        }
        Ok(Some(value))
    }

    fn error(&self) -> AppError {
        AppError::Validation(self.error_text.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn integer(min: Option<f64>, max: Option<f64>) -> NumberConstraints {
        NumberConstraints {
            kind: NumberKind::Integer,
            min,
            max,
            ..NumberConstraints::default()
        }
    }

    #[test]
    fn test_integer_pattern() {
        let c = integer(None, None);
        assert_eq!(c.validate("42"), Ok(Some(42.0)));
        assert_eq!(c.validate("-7"), Ok(Some(-7.0)));
        assert_eq!(c.validate("+3"), Ok(Some(3.0)));
        assert!(c.validate("4.5").is_err());
        assert!(c.validate("1e3").is_err());
        assert_eq!(c.validate(""), Ok(None));
    }

    #[test]
    fn test_float_rejects_blank_and_garbage() {
        let c = NumberConstraints::default();
        assert_eq!(c.validate(" 2.5 "), Ok(Some(2.5)));
        assert!(c.validate("   ").is_err());
        assert!(c.validate("abc").is_err());
        assert!(c.validate("NaN").is_err());
    }

    #[test]
    fn test_float_infinity_spellings() {
        let c = NumberConstraints::default();
        assert!(c.validate("inf").is_err());
        assert!(c.validate("infinity").is_err());
        assert!(c.validate("INF").is_err());
        assert_eq!(c.validate("Infinity"), Ok(Some(f64::INFINITY)));
        assert_eq!(c.validate("-Infinity"), Ok(Some(f64::NEG_INFINITY)));
        assert_eq!(c.validate("1e3"), Ok(Some(1000.0)));
    }

    #[test]
    fn test_bounds() {
        let c = integer(Some(18.0), Some(120.0));
        assert!(c.validate("17").is_err());
        assert_eq!(c.validate("18"), Ok(Some(18.0)));
        assert!(c.validate("121").is_err());
    }

    #[test]
    fn test_error_text() {
        let c = NumberConstraints {
            error_text: "Please enter an age above 18".into(),
            min: Some(18.0),
            ..NumberConstraints::default()
        };
        assert_eq!(
            c.validate("3"),
            Err(AppError::Validation("Please enter an age above 18".into()))
        );
        assert_eq!(
            NumberConstraints::default().validate("x").unwrap_err().to_string(),
            "Invalid input"
        );
    }
}
