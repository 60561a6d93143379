use crate::error::RecommendError;
use crate::model::{CriterionWeights, Query};
use serde::Deserialize;

/// Raw form values as they come off the submission, before validation.
///
/// Every text field is optional so that an absent field and an empty string
/// stay distinguishable; both read as "unconstrained" downstream. Weight
/// fields are mandatory on the form, so a missing one is a validation error
/// rather than a default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct QueryForm {
    pub meal_type: Option<String>,
    pub diet_type: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
    pub ingredients: Vec<String>,
    pub calories: Option<String>,
    pub carbs: Option<String>,
    pub protein: Option<String>,
    pub fat: Option<String>,
    pub cook_time: Option<String>,
    /// Checkbox encoding: "on", "true" or "1" count as checked
    pub flexible: Option<String>,
    pub meal_type_weight: Option<String>,
    pub diet_type_weight: Option<String>,
    pub region_weight: Option<String>,
    pub country_weight: Option<String>,
    pub cook_time_weight: Option<String>,
    pub calories_weight: Option<String>,
    pub carbs_weight: Option<String>,
    pub protein_weight: Option<String>,
    pub fat_weight: Option<String>,
    pub ingredients_weight: Option<String>,
}

/// Build a validated [`Query`] from raw form values.
///
/// Fails with [`RecommendError::Validation`] if any weight field is missing
/// or not a finite number, or if a numeric target field is non-empty but not
/// a non-negative finite number. Pure; issues no I/O.
pub fn build(form: &QueryForm) -> Result<Query, RecommendError> {
    let weights = CriterionWeights {
        meal_type: parse_weight("meal_type_weight", &form.meal_type_weight)?,
        diet_type: parse_weight("diet_type_weight", &form.diet_type_weight)?,
        region: parse_weight("region_weight", &form.region_weight)?,
        country: parse_weight("country_weight", &form.country_weight)?,
        cook_time: parse_weight("cook_time_weight", &form.cook_time_weight)?,
        calories: parse_weight("calories_weight", &form.calories_weight)?,
        carbs: parse_weight("carbs_weight", &form.carbs_weight)?,
        protein: parse_weight("protein_weight", &form.protein_weight)?,
        fat: parse_weight("fat_weight", &form.fat_weight)?,
        ingredients: parse_weight("ingredients_weight", &form.ingredients_weight)?,
    };

    Ok(Query {
        meal_type: form.meal_type.clone().unwrap_or_default(),
        diet_type: form.diet_type.clone().unwrap_or_default(),
        region: form.region.clone(),
        country: form.country.clone(),
        ingredients: dedup_preserving_order(&form.ingredients),
        calories: parse_target("calories", &form.calories)?,
        carbs: parse_target("carbs", &form.carbs)?,
        protein: parse_target("protein", &form.protein)?,
        fat: parse_target("fat", &form.fat)?,
        cook_time: parse_target("cook_time", &form.cook_time)?,
        weights,
        flexible: is_checked(form.flexible.as_deref()),
    })
}

/// A weight must be present and parse to a finite number. No range is
/// enforced here; the service interprets the magnitudes.
fn parse_weight(field: &str, value: &Option<String>) -> Result<f64, RecommendError> {
    let raw = value
        .as_deref()
        .ok_or_else(|| RecommendError::validation(field, "weight is required"))?;
    let parsed: f64 = raw
        .trim()
        .parse()
        .map_err(|_| RecommendError::validation(field, format!("'{raw}' is not a number")))?;
    if !parsed.is_finite() {
        return Err(RecommendError::validation(field, "weight must be finite"));
    }
    Ok(parsed)
}

/// Numeric targets are optional; empty and absent both mean unconstrained,
/// which is distinct from an explicit 0.
fn parse_target(field: &str, value: &Option<String>) -> Result<Option<f64>, RecommendError> {
    let raw = match value.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };
    let parsed: f64 = raw
        .parse()
        .map_err(|_| RecommendError::validation(field, format!("'{raw}' is not a number")))?;
    if !parsed.is_finite() || parsed < 0.0 {
        return Err(RecommendError::validation(
            field,
            "must be a non-negative number",
        ));
    }
    Ok(Some(parsed))
}

/// Explicit checkbox decoding instead of loose truthiness: browsers send
/// "on" for a checked box, other callers may send "true" or "1".
fn is_checked(value: Option<&str>) -> bool {
    matches!(value.map(str::trim), Some("on") | Some("true") | Some("1"))
}

fn dedup_preserving_order(items: &[String]) -> Vec<String> {
    let mut seen = Vec::with_capacity(items.len());
    for item in items {
        if !seen.contains(item) {
            seen.push(item.clone());
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> QueryForm {
        QueryForm {
            meal_type: Some("dinner".to_string()),
            diet_type: Some("vegetarian".to_string()),
            region: Some("Asia".to_string()),
            country: None,
            ingredients: vec!["rice".to_string(), "tofu".to_string()],
            calories: Some("500".to_string()),
            carbs: None,
            protein: Some("".to_string()),
            fat: None,
            cook_time: Some("30".to_string()),
            flexible: Some("on".to_string()),
            meal_type_weight: Some("1.0".to_string()),
            diet_type_weight: Some("0.8".to_string()),
            region_weight: Some("0.5".to_string()),
            country_weight: Some("0".to_string()),
            cook_time_weight: Some("0.3".to_string()),
            calories_weight: Some("0.9".to_string()),
            carbs_weight: Some("0.2".to_string()),
            protein_weight: Some("0.7".to_string()),
            fat_weight: Some("0.1".to_string()),
            ingredients_weight: Some("1".to_string()),
        }
    }

    #[test]
    fn test_build_well_formed() {
        let query = build(&filled_form()).unwrap();
        assert_eq!(query.meal_type, "dinner");
        assert_eq!(query.region.as_deref(), Some("Asia"));
        assert_eq!(query.calories, Some(500.0));
        assert_eq!(query.cook_time, Some(30.0));
        assert!(query.flexible);
        assert_eq!(query.weights.meal_type, 1.0);
        assert_eq!(query.weights.ingredients, 1.0);
    }

    #[test]
    fn test_build_is_deterministic() {
        let form = filled_form();
        assert_eq!(build(&form).unwrap(), build(&form).unwrap());
    }

    #[test]
    fn test_missing_weight_fails() {
        let mut form = filled_form();
        form.protein_weight = None;
        let err = build(&form).unwrap_err();
        match err {
            RecommendError::Validation { field, .. } => assert_eq!(field, "protein_weight"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_weight_fails() {
        let mut form = filled_form();
        form.fat_weight = Some("heavy".to_string());
        assert!(matches!(
            build(&form),
            Err(RecommendError::Validation { .. })
        ));
    }

    #[test]
    fn test_non_finite_weight_fails() {
        let mut form = filled_form();
        form.fat_weight = Some("inf".to_string());
        assert!(matches!(
            build(&form),
            Err(RecommendError::Validation { .. })
        ));
    }

    #[test]
    fn test_ingredients_deduplicated_in_order() {
        let mut form = filled_form();
        form.ingredients = vec!["a".to_string(), "b".to_string(), "a".to_string()];
        let query = build(&form).unwrap();
        assert_eq!(query.ingredients, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_target_distinct_from_zero() {
        let mut form = filled_form();
        form.calories = Some("0".to_string());
        form.carbs = Some("".to_string());
        let query = build(&form).unwrap();
        assert_eq!(query.calories, Some(0.0));
        assert_eq!(query.carbs, None);
        assert_eq!(query.protein, None);
    }

    #[test]
    fn test_negative_target_fails() {
        let mut form = filled_form();
        form.calories = Some("-10".to_string());
        assert!(matches!(
            build(&form),
            Err(RecommendError::Validation { field, .. }) if field == "calories"
        ));
    }

    #[test]
    fn test_checkbox_decoding() {
        assert!(is_checked(Some("on")));
        assert!(is_checked(Some("true")));
        assert!(is_checked(Some("1")));
        assert!(!is_checked(Some("off")));
        assert!(!is_checked(Some("yes")));
        assert!(!is_checked(None));
    }

    #[test]
    fn test_absent_strings_read_as_unconstrained() {
        let mut form = filled_form();
        form.meal_type = None;
        form.region = None;
        let query = build(&form).unwrap();
        assert_eq!(query.meal_type, "");
        assert_eq!(query.region, None);
    }

    #[test]
    fn test_query_serde_round_trip() {
        let query = build(&filled_form()).unwrap();
        let json = serde_json::to_string(&query).unwrap();
        let rebuilt: Query = serde_json::from_str(&json).unwrap();
        assert_eq!(query, rebuilt);
    }

    #[test]
    fn test_unset_targets_omitted_from_wire() {
        let query = build(&filled_form()).unwrap();
        let json: serde_json::Value = serde_json::to_value(&query).unwrap();
        assert!(json.get("carbs").is_none());
        assert!(json.get("country").is_none());
        assert_eq!(json["calories"], 500.0);
    }
}
