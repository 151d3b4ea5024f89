//! Errors raised when constructing or parsing a [`Rational`](crate::Rational)
//!
//! Arithmetic never fails; it produces NaN instead. These errors only come
//! out of the validating constructors and the string parser.

use std::num::ParseIntError;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RationalError {
    #[error("denominator must not be zero")]
    InvalidDenominator,

    #[error("{numerator}/{denominator} cannot be reduced into the i64 range")]
    Overflow { numerator: i64, denominator: i64 },

    #[error("invalid integer {text:?}: {source}")]
    InvalidNumber {
        text: String,
        #[source]
        source: ParseIntError,
    },
}

impl From<RationalError> for JsValue {
    fn from(e: RationalError) -> JsValue {
        js_sys::Error::new(&e.to_string()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_messages() {
        assert_eq!(
            RationalError::InvalidDenominator.to_string(),
            "denominator must not be zero"
        );

        let overflow = RationalError::Overflow {
            numerator: i64::MIN,
            denominator: -1,
        };
        assert_eq!(
            overflow.to_string(),
            "-9223372036854775808/-1 cannot be reduced into the i64 range"
        );
    }

    #[test]
    fn test_invalid_number_keeps_source() {
        let source = "x".parse::<i64>().unwrap_err();
        let err = RationalError::InvalidNumber {
            text: "x".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("invalid integer \"x\""));
        assert!(err.source().is_some());
    }
}
