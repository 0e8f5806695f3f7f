//! Recipe snapshot model.
//!
//! A [`Snapshot`] is the versioned payload of one commit. It is owned by the
//! caller and only ever borrowed by the diff engine.
//!
//! Deserialization is lenient: absent or `null` fields become the empty
//! string, zero, or an empty list rather than failing, so that records
//! written by older clients still diff. Serving sizes and step orders that
//! are negative, fractional or non-numeric read as zero, which the anomaly
//! checks then report.

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// The structured content of a recipe at one commit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Number of servings the amounts are written for
    #[serde(default, deserialize_with = "lenient_count")]
    pub serving_size: u32,
    /// Ingredients in display order
    #[serde(
        default,
        alias = "recipeIngredients",
        deserialize_with = "null_as_default"
    )]
    pub ingredients: Vec<Ingredient>,
    /// Steps; display order is given by [`Step::order`], not list position
    #[serde(default, alias = "recipeSteps", deserialize_with = "null_as_default")]
    pub steps: Vec<Step>,
}

impl Snapshot {
    pub fn new(serving_size: u32, ingredients: Vec<Ingredient>, steps: Vec<Step>) -> Self {
        Self {
            serving_size,
            ingredients,
            steps,
        }
    }

    /// True when the snapshot holds no ingredients and no steps.
    pub fn is_blank(&self) -> bool {
        self.ingredients.is_empty() && self.steps.is_empty()
    }
}

/// One ingredient line. Has no stored identifier; identity across
/// snapshots is inferred from the name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Ingredient {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount: f64,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, unit: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            unit: unit.into(),
            amount,
        }
    }
}

impl std::fmt::Display for Ingredient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.unit.trim().is_empty() {
            write!(f, "{} {}", self.amount, self.name)
        } else {
            write!(f, "{} {} {}", self.amount, self.unit, self.name)
        }
    }
}

/// One instruction step.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Step {
    /// 1-based display position, unique within a snapshot
    #[serde(default, deserialize_with = "lenient_count")]
    pub order: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: String,
}

impl Step {
    pub fn new(order: u32, details: impl Into<String>) -> Self {
        Self {
            order,
            details: details.into(),
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}. {}", self.order, self.details)
    }
}

/// Treat an explicit JSON `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read a non-negative integer count. Out-of-range values saturate at
/// `u32::MAX`; anything that is not a whole non-negative number reads as 0.
fn lenient_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(CountVisitor)
}

struct CountVisitor;

impl<'de> Visitor<'de> for CountVisitor {
    type Value = u32;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a count")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
        Ok(u32::try_from(v).unwrap_or(u32::MAX))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
        Ok(u32::try_from(v.max(0)).unwrap_or(u32::MAX))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<u32, E> {
        if v.is_finite() && v >= 0.0 && v.fract() == 0.0 {
            // `as` saturates at u32::MAX
            Ok(v as u32)
        } else {
            Ok(0)
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
        match v.trim().parse::<f64>() {
            Ok(parsed) => self.visit_f64(parsed),
            Err(_) => Ok(0),
        }
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<u32, E> {
        Ok(0)
    }

    fn visit_unit<E: de::Error>(self) -> Result<u32, E> {
        Ok(0)
    }

    fn visit_none<E: de::Error>(self) -> Result<u32, E> {
        Ok(0)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<u32, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "servingSize": 4,
            "ingredients": [{"name": "flour", "unit": "cups", "amount": 2}],
            "steps": [{"order": 1, "details": "Mix"}]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.serving_size, 4);
        assert_eq!(snapshot.ingredients[0], Ingredient::new("flour", "cups", 2.0));
        assert_eq!(snapshot.steps[0], Step::new(1, "Mix"));
    }

    #[test]
    fn test_deserialize_accepts_recipe_field_aliases() {
        let json = r#"{
            "servingSize": 2,
            "recipeIngredients": [{"name": "salt", "unit": "tsp", "amount": 1}],
            "recipeSteps": [{"order": 1, "details": "Season"}]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.ingredients.len(), 1);
        assert_eq!(snapshot.steps.len(), 1);
    }

    #[test]
    fn test_missing_and_null_fields_default() {
        let json = r#"{
            "servingSize": null,
            "ingredients": [{"name": "egg", "unit": null}],
            "steps": [{"details": "Crack"}]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.serving_size, 0);
        assert_eq!(snapshot.ingredients[0].unit, "");
        assert_eq!(snapshot.ingredients[0].amount, 0.0);
        assert_eq!(snapshot.steps[0].order, 0);
    }

    #[test]
    fn test_out_of_range_counts_read_as_zero() {
        let json = r#"{
            "servingSize": -1,
            "ingredients": [],
            "steps": [
                {"order": 1.5, "details": "Mix"},
                {"order": -3, "details": "Rest"},
                {"order": 2.0, "details": "Bake"},
                {"order": "4", "details": "Cool"},
                {"order": 99999999999, "details": "Serve"}
            ]
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.serving_size, 0);
        let orders: Vec<u32> = snapshot.steps.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 0, 2, 4, u32::MAX]);
    }

    #[test]
    fn test_empty_object_is_blank() {
        let snapshot: Snapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_blank());
    }

    #[test]
    fn test_display() {
        assert_eq!(Ingredient::new("flour", "cups", 2.5).to_string(), "2.5 cups flour");
        assert_eq!(Ingredient::new("egg", "", 3.0).to_string(), "3 egg");
        assert_eq!(Step::new(2, "Bake").to_string(), "2. Bake");
    }
}
