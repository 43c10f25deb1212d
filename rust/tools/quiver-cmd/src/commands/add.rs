use anyhow::{Context, Result};
use chrono::DateTime;
use quiver_datemath::{DateAddField, DateMathError, date_add_high_precision_nullable};

/// Validates the arguments and evaluates one date-add expression.
///
/// The kernels treat an out-of-range `dim` as a precondition violation,
/// so the tool is the layer that checks it.
pub(crate) fn evaluate(
    field: &str,
    number: i64,
    timestamp: i64,
    dim: i32,
    null_val: i64,
) -> Result<i64> {
    let field: DateAddField = field.parse().context("invalid --field")?;
    if !matches!(dim, 0 | 3 | 6 | 9) {
        return Err(DateMathError::InvalidDimension(dim).into());
    }
    Ok(date_add_high_precision_nullable(
        field, number, timestamp, dim, null_val,
    ))
}

pub fn run(field: &str, number: i64, timestamp: i64, dim: i32, null_val: Option<i64>) -> Result<()> {
    let null_val = null_val.unwrap_or(i64::MIN);
    let result = evaluate(field, number, timestamp, dim, null_val)?;

    if result == null_val {
        println!("null ({result})");
        return Ok(());
    }

    println!("{result}");
    if dim == 0 {
        if let Some(utc) = DateTime::from_timestamp(result, 0) {
            println!("{}", utc.format("%Y-%m-%dT%H:%M:%SZ"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::evaluate;

    #[test]
    fn test_evaluate_basic_add() {
        // 2021-01-31T00:00:00Z plus one month clamps to Feb 28.
        assert_eq!(
            evaluate("month", 1, 1612051200, 0, i64::MIN).unwrap(),
            1614470400
        );
    }

    #[test]
    fn test_evaluate_rejects_unknown_field() {
        assert!(evaluate("fortnight", 1, 0, 0, i64::MIN).is_err());
    }

    #[test]
    fn test_evaluate_rejects_bad_dim() {
        assert!(evaluate("day", 1, 0, 2, i64::MIN).is_err());
        assert!(evaluate("day", 1, 0, -3, i64::MIN).is_err());
        assert!(evaluate("day", 1, 0, 9, i64::MIN).is_ok());
    }

    #[test]
    fn test_evaluate_propagates_null() {
        assert_eq!(evaluate("year", 10, -42, 0, -42).unwrap(), -42);
    }
}
