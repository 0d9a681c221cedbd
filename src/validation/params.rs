use crate::error::{AppError, Result};

/// Parses a path parameter as a positive integer id.
///
/// The resource name only feeds the error message, e.g.
/// `"Invalid employee id"`.
pub fn parse_id(raw: &str, resource: &str) -> Result<i64> {
    raw.parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::Validation(format!("Invalid {} id", resource)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_integers() {
        assert_eq!(parse_id("1", "employee").unwrap(), 1);
        assert_eq!(parse_id("9007199254740993", "employee").unwrap(), 9007199254740993);
    }

    #[test]
    fn rejects_everything_else() {
        for raw in ["abc", "", "0", "-4", "1.5", "1e3", " 1"] {
            let err = parse_id(raw, "employee").unwrap_err();
            assert_eq!(err.to_string(), "Validation error: Invalid employee id");
        }
    }
}
