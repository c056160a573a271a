//! The [`Pizza`] product trait and the workflow steps applied to every pizza.
//!
//! Every regional variant (see [`ny_style`](crate::model::ny_style) and
//! [`chicago_style`](crate::model::chicago_style)) implements [`Pizza`]. The
//! ordering workflow in [`PizzaStore::order_pizza`](crate::store::PizzaStore::order_pizza)
//! only talks to this trait, so it never needs to know which variant a store built.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Default bake time, in minutes.
pub const BAKE_MINUTES: u32 = 25;

/// Default oven temperature, in degrees Fahrenheit.
pub const BAKE_DEGREES: u32 = 350;

/// How a pizza is sliced before it goes in the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slicing {
    /// Classic wedge slices.
    Diagonal,
    /// Tavern-style square slices.
    Square,
}

/// One step of the ordering workflow, as performed on a specific pizza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepStep {
    /// Dough tossed, sauce and toppings added.
    Prepare,
    /// Baked for `minutes` at `degrees`.
    Bake { minutes: u32, degrees: u32 },
    /// Sliced with the given style.
    Cut(Slicing),
    /// Placed in the store box.
    Boxed,
}

/// Shared capability of every pizza variant.
///
/// # Products are values
/// Implementations are plain immutable values. Stores build a fresh one per
/// request and hand ownership to the caller; nothing keeps a reference back.
///
/// # Workflow hooks
/// [`prepare`](Pizza::prepare), [`bake`](Pizza::bake), [`cut`](Pizza::cut) and
/// [`boxed`](Pizza::boxed) are provided methods. A variant only overrides the
/// ones that differ (Chicago deep dish, for example, only changes
/// [`slicing`](Pizza::slicing)).
pub trait Pizza: Debug + Send + Sync {
    /// Display name, unique per variant.
    fn name(&self) -> &str;

    fn dough(&self) -> &str;

    fn sauce(&self) -> &str;

    fn toppings(&self) -> &[&'static str];

    /// Slicing style used by [`cut`](Pizza::cut).
    fn slicing(&self) -> Slicing {
        Slicing::Diagonal
    }

    /// Human-readable one-line summary of the pizza.
    fn describe(&self) -> String {
        let toppings = self.toppings();
        if toppings.is_empty() {
            format!("{} ({}, {})", self.name(), self.dough(), self.sauce())
        } else {
            format!(
                "{} ({}, {}; topped with {})",
                self.name(),
                self.dough(),
                self.sauce(),
                toppings.join(", ")
            )
        }
    }

    // --- Workflow hooks ---

    fn prepare(&self) -> PrepStep {
        PrepStep::Prepare
    }

    fn bake(&self) -> PrepStep {
        PrepStep::Bake {
            minutes: BAKE_MINUTES,
            degrees: BAKE_DEGREES,
        }
    }

    fn cut(&self) -> PrepStep {
        PrepStep::Cut(self.slicing())
    }

    fn boxed(&self) -> PrepStep {
        PrepStep::Boxed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct PlainPizza;

    impl Pizza for PlainPizza {
        fn name(&self) -> &str {
            "Plain Pizza"
        }

        fn dough(&self) -> &str {
            "Regular Dough"
        }

        fn sauce(&self) -> &str {
            "Tomato Sauce"
        }

        fn toppings(&self) -> &[&'static str] {
            &[]
        }
    }

    #[test]
    fn test_default_hooks() {
        let pizza = PlainPizza;

        assert_eq!(pizza.prepare(), PrepStep::Prepare);
        assert_eq!(
            pizza.bake(),
            PrepStep::Bake {
                minutes: 25,
                degrees: 350
            }
        );
        assert_eq!(pizza.cut(), PrepStep::Cut(Slicing::Diagonal));
        assert_eq!(pizza.boxed(), PrepStep::Boxed);
    }

    #[test]
    fn test_describe_without_toppings() {
        assert_eq!(
            PlainPizza.describe(),
            "Plain Pizza (Regular Dough, Tomato Sauce)"
        );
    }

    #[test]
    fn test_prep_step_serializes_snake_case() {
        let json = serde_json::to_string(&PrepStep::Cut(Slicing::Square)).unwrap();
        assert_eq!(json, r#"{"cut":"square"}"#);
    }
}
