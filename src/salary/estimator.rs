//! Single-listing salary estimation.
//!
//! Job boards rarely publish both bounds of a salary range. The estimator turns
//! whatever is available into one comparable figure:
//!
//! - both bounds known: `floor((from + to) / 2)`
//! - only `to`: `floor(to * factor_top)`
//! - only `from`: `floor(from * factor_bottom)`
//!
//! Anything else (no record, foreign currency, no bounds, malformed fields)
//! becomes `EstimatedSalary::Unusable`. Estimation never fails the run.

use serde_json::Value;

use crate::domain::{EstimatedSalary, EstimatorConfig, RawSalary};

/// Why a JSON salary record could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedSalary(pub String);

/// Estimate one listing's salary in the target currency.
pub fn estimate(raw: Option<&RawSalary>, config: &EstimatorConfig) -> EstimatedSalary {
    let Some(raw) = raw else {
        return EstimatedSalary::Unusable;
    };

    match raw.currency.as_deref() {
        Some(currency) if config.accepts_currency(currency) => {}
        _ => return EstimatedSalary::Unusable,
    }

    let value = match (raw.from, raw.to) {
        (Some(from), Some(to)) => from
            .checked_add(to)
            .map(|sum| sum / EstimatorConfig::MIDPOINT_DIVISOR),
        (None, Some(to)) => config.factor_top.apply(to),
        (Some(from), None) => config.factor_bottom.apply(from),
        (None, None) => None,
    };

    match value {
        Some(v) => EstimatedSalary::Value(v),
        None => EstimatedSalary::Unusable,
    }
}

/// Estimate straight from a listing's JSON `salary` field.
///
/// `null` means the listing has no salary section. Records of the wrong shape
/// are logged and counted as `Unusable`, so one bad listing cannot abort a run.
pub fn estimate_json(value: &Value, config: &EstimatorConfig) -> EstimatedSalary {
    match parse_raw_salary(value) {
        Ok(raw) => estimate(raw.as_ref(), config),
        Err(MalformedSalary(reason)) => {
            tracing::debug!(%reason, record = %value, "skipping malformed salary record");
            EstimatedSalary::Unusable
        }
    }
}

/// Read a JSON salary record.
///
/// Accepted shape: `null`, or an object with optional `currency` (string or null)
/// and optional `from`/`to` (non-negative integer or null). Unknown keys are ignored.
pub fn parse_raw_salary(value: &Value) -> Result<Option<RawSalary>, MalformedSalary> {
    let obj = match value {
        Value::Null => return Ok(None),
        Value::Object(obj) => obj,
        other => {
            return Err(MalformedSalary(format!(
                "expected object or null, got {}",
                json_kind(other)
            )));
        }
    };

    let currency = match obj.get("currency") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(MalformedSalary(format!(
                "currency must be a string, got {}",
                json_kind(other)
            )));
        }
    };

    Ok(Some(RawSalary {
        currency,
        from: parse_bound(obj.get("from"), "from")?,
        to: parse_bound(obj.get("to"), "to")?,
    }))
}

fn parse_bound(value: Option<&Value>, field: &str) -> Result<Option<u64>, MalformedSalary> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => n
            .as_u64()
            .map(Some)
            .ok_or_else(|| MalformedSalary(format!("{field} must be a non-negative integer, got {n}"))),
        Some(other) => Err(MalformedSalary(format!(
            "{field} must be a number, got {}",
            json_kind(other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Factor;
    use serde_json::json;

    fn raw(currency: &str, from: Option<u64>, to: Option<u64>) -> RawSalary {
        RawSalary {
            currency: Some(currency.to_string()),
            from,
            to,
        }
    }

    #[test]
    fn both_bounds_use_floor_midpoint() {
        let cfg = EstimatorConfig::default();
        let r = raw("RUR", Some(100_000), Some(120_000));
        assert_eq!(estimate(Some(&r), &cfg), EstimatedSalary::Value(110_000));

        let odd = raw("RUR", Some(100_000), Some(100_001));
        assert_eq!(estimate(Some(&odd), &cfg), EstimatedSalary::Value(100_000));
    }

    #[test]
    fn only_top_bound_uses_factor_top() {
        let cfg = EstimatorConfig::default();
        let r = raw("rub", None, Some(100_000));
        assert_eq!(estimate(Some(&r), &cfg), EstimatedSalary::Value(80_000));
    }

    #[test]
    fn only_bottom_bound_uses_factor_bottom() {
        let cfg = EstimatorConfig::default();
        let r = raw("RUR", Some(50_000), None);
        assert_eq!(estimate(Some(&r), &cfg), EstimatedSalary::Value(60_000));
    }

    #[test]
    fn custom_factors_are_applied() {
        let cfg = EstimatorConfig {
            factor_top: Factor::new(0.5).unwrap(),
            factor_bottom: Factor::new(1.5).unwrap(),
            ..EstimatorConfig::default()
        };
        assert_eq!(
            estimate(Some(&raw("RUR", None, Some(90_001))), &cfg),
            EstimatedSalary::Value(45_000)
        );
        assert_eq!(
            estimate(Some(&raw("RUR", Some(10_001), None)), &cfg),
            EstimatedSalary::Value(15_001)
        );
    }

    #[test]
    fn foreign_currency_is_unusable() {
        let cfg = EstimatorConfig::default();
        for (from, to) in [(Some(1), Some(2)), (Some(1), None), (None, Some(2)), (None, None)] {
            assert_eq!(estimate(Some(&raw("USD", from, to)), &cfg), EstimatedSalary::Unusable);
        }
        let no_currency = RawSalary {
            currency: None,
            from: Some(100),
            to: Some(200),
        };
        assert_eq!(estimate(Some(&no_currency), &cfg), EstimatedSalary::Unusable);
    }

    #[test]
    fn currency_is_case_insensitive() {
        let cfg = EstimatorConfig::default();
        assert_eq!(
            estimate(Some(&raw("RUB", Some(10), Some(20))), &cfg),
            EstimatedSalary::Value(15)
        );
    }

    #[test]
    fn missing_record_or_bounds_is_unusable() {
        let cfg = EstimatorConfig::default();
        assert_eq!(estimate(None, &cfg), EstimatedSalary::Unusable);
        assert_eq!(estimate(Some(&raw("RUR", None, None)), &cfg), EstimatedSalary::Unusable);
    }

    #[test]
    fn overflowing_bounds_are_unusable() {
        let cfg = EstimatorConfig::default();
        let r = raw("RUR", Some(u64::MAX), Some(u64::MAX));
        assert_eq!(estimate(Some(&r), &cfg), EstimatedSalary::Unusable);
    }

    #[test]
    fn estimate_is_repeatable() {
        let cfg = EstimatorConfig::default();
        let r = raw("RUR", Some(77_777), None);
        assert_eq!(estimate(Some(&r), &cfg), estimate(Some(&r), &cfg));
    }

    #[test]
    fn json_records_are_estimated() {
        let cfg = EstimatorConfig::default();
        let v = json!({"from": 100000, "to": 120000, "currency": "RUR", "gross": false});
        assert_eq!(estimate_json(&v, &cfg), EstimatedSalary::Value(110_000));

        let v = json!({"from": null, "to": 100000, "currency": "rub"});
        assert_eq!(estimate_json(&v, &cfg), EstimatedSalary::Value(80_000));

        assert_eq!(estimate_json(&Value::Null, &cfg), EstimatedSalary::Unusable);
    }

    #[test]
    fn malformed_json_records_are_unusable() {
        let cfg = EstimatorConfig::default();
        let cases = [
            json!("100000"),
            json!([1, 2]),
            json!({"from": "100000", "to": null, "currency": "RUR"}),
            json!({"from": -5, "to": null, "currency": "RUR"}),
            json!({"from": 1.5, "to": null, "currency": "RUR"}),
            json!({"from": 1, "to": 2, "currency": 643}),
        ];
        for case in cases {
            assert_eq!(estimate_json(&case, &cfg), EstimatedSalary::Unusable, "{case}");
        }
    }

    #[test]
    fn parse_raw_salary_handles_missing_keys() {
        let parsed = parse_raw_salary(&json!({"currency": "RUR"})).unwrap().unwrap();
        assert_eq!(parsed, raw("RUR", None, None));
        assert!(parse_raw_salary(&json!({"from": "x"})).is_err());
    }
}
