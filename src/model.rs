use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A validated recommendation request.
///
/// Built by [`crate::query::build`] from raw form values; immutable once
/// built. Optional numeric targets are omitted from the serialized request
/// entirely so the service treats them as unconstrained, while an explicit
/// `0` travels as a real constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Query {
    /// Free-form category tag; empty means no constraint
    pub meal_type: String,
    /// Free-form category tag; empty means no constraint
    pub diet_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Selected ingredient names, deduplicated, first-seen order
    pub ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carbs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<f64>,
    pub weights: CriterionWeights,
    /// Relaxed-matching flag
    pub flexible: bool,
}

/// Per-criterion weights, one for each of the ten criteria the service
/// scores on. A fixed-field struct rather than a map so a weight can never
/// go missing on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeights {
    pub meal_type: f64,
    pub diet_type: f64,
    pub region: f64,
    pub country: f64,
    pub cook_time: f64,
    pub calories: f64,
    pub carbs: f64,
    pub protein: f64,
    pub fat: f64,
    pub ingredients: f64,
}

/// Ordered recipe identifiers returned by the service for one query.
/// An empty list is a valid "no matches" outcome.
pub type ResultSet = Vec<String>;

/// Full record for a single recipe, fetched on demand by identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub meal_type: Vec<String>,
    pub diet_type: Vec<String>,
    pub health_type: Vec<String>,
    pub region: Vec<String>,
    pub country: Vec<String>,
    pub cook_time: String,
    pub ingredients: Vec<String>,
    /// Raw instruction text; see [`crate::instructions::format_instructions`]
    pub instructions: String,
    /// Named nutrition fields as the service reports them
    /// (e.g. "Calories", "FatContent")
    pub nutrition_facts: HashMap<String, String>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// One normalized instruction step, ordered by position in the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step(pub String);

impl Step {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
