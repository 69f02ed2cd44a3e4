//! Incoming request shapes and result-count validation shared by the page and the JSON API.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::generation::generator::IdeaSelection;

/// Urlencoded form posted by the page. Every field is optional; missing
/// fields flow through the generator's fallbacks.
#[derive(Debug, Default, Deserialize)]
pub struct IdeaForm {
    pub industry: Option<String>,
    pub ptype: Option<String>,
    pub difficulty: Option<String>,
    /// Kept as text so a non-numeric value becomes a validation error, not a rejection.
    pub num_results: Option<String>,
}

impl IdeaForm {
    pub fn selection(&self) -> IdeaSelection {
        IdeaSelection::new(
            self.industry.clone().unwrap_or_default(),
            self.ptype.clone().unwrap_or_default(),
            self.difficulty.clone().unwrap_or_default(),
        )
    }
}

/// JSON body for `POST /api/v1/ideas`.
///
/// `null` and missing fields are treated alike. `num_results` may be a number
/// or a numeric string; it is validated by `result_count`, not by serde.
#[derive(Debug, Default, Deserialize)]
pub struct IdeaRequest {
    pub industry: Option<String>,
    pub ptype: Option<String>,
    pub difficulty: Option<String>,
    pub num_results: Option<Value>,
}

impl IdeaRequest {
    pub fn selection(&self) -> IdeaSelection {
        IdeaSelection::new(
            self.industry.clone().unwrap_or_default(),
            self.ptype.clone().unwrap_or_default(),
            self.difficulty.clone().unwrap_or_default(),
        )
    }

    /// Resolves `num_results` with the same rules as the form field.
    pub fn result_count(&self, default: usize, max: usize) -> Result<usize, AppError> {
        match &self.num_results {
            None | Some(Value::Null) => Ok(default),
            Some(Value::String(raw)) => parse_result_count(Some(raw.as_str()), default, max),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(n) => bounded_result_count(n, max),
                None if n.is_u64() => Err(above_max(max)),
                None => Err(not_whole_number()),
            },
            Some(_) => Err(not_whole_number()),
        }
    }
}

/// Parses the `num_results` form field.
///
/// Absent or blank → `default`. Anything that is not a whole number, is
/// negative, or exceeds `max` is a validation error. Zero is allowed.
pub fn parse_result_count(
    raw: Option<&str>,
    default: usize,
    max: usize,
) -> Result<usize, AppError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(default),
        Some(raw) => raw,
    };

    let n: i64 = raw.parse().map_err(|_| not_whole_number())?;

    bounded_result_count(n, max)
}

/// Checks an already-numeric result count against `[0, max]`.
pub fn bounded_result_count(n: i64, max: usize) -> Result<usize, AppError> {
    let n = usize::try_from(n).map_err(|_| not_whole_number())?;

    if n > max {
        return Err(above_max(max));
    }

    Ok(n)
}

fn not_whole_number() -> AppError {
    AppError::Validation("num_results must be a whole number".to_string())
}

fn above_max(max: usize) -> AppError {
    AppError::Validation(format!("num_results must be at most {max}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(err: AppError) -> String {
        match err {
            AppError::Validation(msg) => msg,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_absent_uses_default() {
        assert_eq!(parse_result_count(None, 5, 50).unwrap(), 5);
    }

    #[test]
    fn test_blank_uses_default() {
        assert_eq!(parse_result_count(Some("   "), 5, 50).unwrap(), 5);
    }

    #[test]
    fn test_numeric_is_parsed() {
        assert_eq!(parse_result_count(Some("8"), 5, 50).unwrap(), 8);
        assert_eq!(parse_result_count(Some(" 12 "), 5, 50).unwrap(), 12);
    }

    #[test]
    fn test_zero_is_allowed() {
        assert_eq!(parse_result_count(Some("0"), 5, 50).unwrap(), 0);
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        let err = parse_result_count(Some("five"), 5, 50).unwrap_err();
        assert_eq!(message(err), "num_results must be a whole number");

        assert!(parse_result_count(Some("2.5"), 5, 50).is_err());
    }

    #[test]
    fn test_negative_is_rejected() {
        let err = parse_result_count(Some("-1"), 5, 50).unwrap_err();
        assert_eq!(message(err), "num_results must be a whole number");
    }

    #[test]
    fn test_above_max_is_rejected() {
        let err = parse_result_count(Some("51"), 5, 50).unwrap_err();
        assert_eq!(message(err), "num_results must be at most 50");
        assert_eq!(parse_result_count(Some("50"), 5, 50).unwrap(), 50);
    }

    #[test]
    fn test_form_selection_defaults_to_empty() {
        let form = IdeaForm {
            industry: Some("School".to_string()),
            ..Default::default()
        };
        let selection = form.selection();
        assert_eq!(selection.industry, "School");
        assert_eq!(selection.ptype, "");
        assert_eq!(selection.difficulty, "");
    }

    #[test]
    fn test_json_request_fields_are_optional() {
        let request: IdeaRequest = serde_json::from_str(r#"{"ptype": "Web App"}"#).unwrap();
        assert_eq!(request.selection().ptype, "Web App");
        assert_eq!(request.selection().industry, "");
        assert_eq!(request.result_count(5, 50).unwrap(), 5);
    }

    #[test]
    fn test_json_null_fields_fall_back() {
        let request: IdeaRequest =
            serde_json::from_str(r#"{"industry": null, "num_results": null}"#).unwrap();
        assert_eq!(request.selection(), IdeaSelection::default());
        assert_eq!(request.result_count(5, 50).unwrap(), 5);
    }

    #[test]
    fn test_json_count_accepts_number_or_numeric_string() {
        let request: IdeaRequest = serde_json::from_str(r#"{"num_results": 7}"#).unwrap();
        assert_eq!(request.result_count(5, 50).unwrap(), 7);

        let request: IdeaRequest = serde_json::from_str(r#"{"num_results": " 9 "}"#).unwrap();
        assert_eq!(request.result_count(5, 50).unwrap(), 9);
    }

    #[test]
    fn test_json_count_rejects_non_integers() {
        for body in [
            r#"{"num_results": "abc"}"#,
            r#"{"num_results": 2.5}"#,
            r#"{"num_results": true}"#,
            r#"{"num_results": [3]}"#,
            r#"{"num_results": -4}"#,
        ] {
            let request: IdeaRequest = serde_json::from_str(body).unwrap();
            let err = request.result_count(5, 50).unwrap_err();
            assert_eq!(message(err), "num_results must be a whole number", "{body}");
        }
    }

    #[test]
    fn test_json_count_rejects_huge_number() {
        let request: IdeaRequest =
            serde_json::from_str(r#"{"num_results": 18446744073709551615}"#).unwrap();
        let err = request.result_count(5, 50).unwrap_err();
        assert_eq!(message(err), "num_results must be at most 50");
    }
}
