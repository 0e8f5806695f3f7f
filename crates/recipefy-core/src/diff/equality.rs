//! Equality rules shared by every diff stage.
//!
//! Three predicates, strongest first:
//!
//! 1. **Record** equality: every field equal. Strings compare trimmed and
//!    case-insensitively; amounts compare with a relative tolerance.
//! 2. **Identity** equality: "the same logical entity, possibly edited".
//!    Ingredient name for ingredients, step details for steps.
//! 3. **Position** equality (steps only): same `order`.
//!
//! All predicates are total and symmetric.

use crate::model::{Ingredient, Step};

/// Relative tolerance used when comparing ingredient amounts.
pub const AMOUNT_TOLERANCE: f64 = 1e-9;

/// A record kind the matcher can pair across two snapshots.
pub trait Record {
    /// All fields equal.
    fn same_record(&self, other: &Self) -> bool;

    /// Same logical entity.
    fn same_identity(&self, other: &Self) -> bool;

    /// All non-positional fields equal. A pair that differs here is a
    /// content edit, whatever happened to its position.
    fn same_content(&self, other: &Self) -> bool;

    /// Same explicit display position.
    fn same_position(&self, _other: &Self) -> bool {
        false
    }

    /// Explicit display position, if the record carries one. Records
    /// without one are sequenced by list index.
    fn sequence_key(&self) -> Option<u32> {
        None
    }
}

/// Trimmed, case-insensitive string equality.
pub fn same_text(a: &str, b: &str) -> bool {
    a.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .eq(b.trim().chars().flat_map(char::to_lowercase))
}

/// Tolerant amount equality. Non-finite values compare as zero.
pub fn same_amount(a: f64, b: f64) -> bool {
    let a = finite_or_zero(a);
    let b = finite_or_zero(b);
    let scale = a.abs().max(b.abs()).max(1.0);
    (a - b).abs() <= AMOUNT_TOLERANCE * scale
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

impl Record for Ingredient {
    fn same_record(&self, other: &Self) -> bool {
        same_text(&self.name, &other.name)
            && same_text(&self.unit, &other.unit)
            && same_amount(self.amount, other.amount)
    }

    fn same_identity(&self, other: &Self) -> bool {
        same_text(&self.name, &other.name)
    }

    fn same_content(&self, other: &Self) -> bool {
        self.same_record(other)
    }
}

impl Record for Step {
    fn same_record(&self, other: &Self) -> bool {
        self.order == other.order && same_text(&self.details, &other.details)
    }

    fn same_identity(&self, other: &Self) -> bool {
        same_text(&self.details, &other.details)
    }

    fn same_content(&self, other: &Self) -> bool {
        self.same_identity(other)
    }

    fn same_position(&self, other: &Self) -> bool {
        self.order == other.order
    }

    fn sequence_key(&self) -> Option<u32> {
        Some(self.order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_text_ignores_case_and_surrounding_space() {
        assert!(same_text("Flour", "  flour "));
        assert!(same_text("", "   "));
        assert!(!same_text("flour", "flower"));
        assert!(!same_text("brown sugar", "brownsugar"));
    }

    #[test]
    fn test_same_amount_tolerance() {
        assert!(same_amount(0.1 + 0.2, 0.3));
        assert!(same_amount(2.0, 2.0));
        assert!(!same_amount(2.0, 3.0));
        assert!(!same_amount(0.001, 0.002));
    }

    #[test]
    fn test_non_finite_amounts_compare_as_zero() {
        assert!(same_amount(f64::NAN, 0.0));
        assert!(same_amount(f64::INFINITY, f64::NAN));
        assert!(!same_amount(f64::NAN, 1.0));
    }

    #[test]
    fn test_ingredient_rules() {
        let a = Ingredient::new("Flour", "cups", 2.0);
        let b = Ingredient::new("flour", "CUPS ", 2.0);
        let c = Ingredient::new("flour", "cups", 3.0);

        assert!(a.same_record(&b));
        assert!(a.same_identity(&c));
        assert!(!a.same_record(&c));
        assert!(!a.same_position(&b));
        assert_eq!(a.sequence_key(), None);
    }

    #[test]
    fn test_step_rules() {
        let mix1 = Step::new(1, "Mix");
        let mix2 = Step::new(2, " mix");
        let stir1 = Step::new(1, "Stir");

        assert!(mix1.same_identity(&mix2));
        assert!(mix1.same_content(&mix2));
        assert!(!mix1.same_record(&mix2));
        assert!(mix1.same_position(&stir1));
        assert!(!mix1.same_identity(&stir1));
        assert_eq!(mix2.sequence_key(), Some(2));
    }

    #[test]
    fn test_predicates_are_symmetric() {
        let a = Ingredient::new("salt", "tsp", 1.0);
        let b = Ingredient::new(" SALT", "tsp", 1.0 + 1e-12);
        assert_eq!(a.same_record(&b), b.same_record(&a));
        assert_eq!(a.same_identity(&b), b.same_identity(&a));
    }
}
