//! Chicago style deep dish pizzas.
//!
//! Deep dish overrides a single hook: it is cut into square slices instead of
//! wedges. Everything else uses the [`Pizza`] defaults.

use super::pizza::{Pizza, Slicing};

/// Chicago style deep dish cheese pizza.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChicagoStyleCheesePizza;

impl Pizza for ChicagoStyleCheesePizza {
    fn name(&self) -> &str {
        "Chicago Style Deep Dish Cheese Pizza"
    }

    fn dough(&self) -> &str {
        "Extra Thick Crust Dough"
    }

    fn sauce(&self) -> &str {
        "Plum Tomato Sauce"
    }

    fn toppings(&self) -> &[&'static str] {
        &["Shredded Mozzarella Cheese"]
    }

    fn slicing(&self) -> Slicing {
        Slicing::Square
    }
}

/// Chicago style deep dish pepperoni pizza.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChicagoStylePepperoniPizza;

impl Pizza for ChicagoStylePepperoniPizza {
    fn name(&self) -> &str {
        "Chicago Style Pepperoni Pizza"
    }

    fn dough(&self) -> &str {
        "Extra Thick Crust Dough"
    }

    fn sauce(&self) -> &str {
        "Plum Tomato Sauce"
    }

    fn toppings(&self) -> &[&'static str] {
        &[
            "Shredded Mozzarella Cheese",
            "Black Olives",
            "Spinach",
            "Eggplant",
            "Sliced Pepperoni",
        ]
    }

    fn slicing(&self) -> Slicing {
        Slicing::Square
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PrepStep;

    #[test]
    fn test_deep_dish_cuts_square() {
        assert_eq!(ChicagoStyleCheesePizza.cut(), PrepStep::Cut(Slicing::Square));
        assert_eq!(ChicagoStylePepperoniPizza.cut(), PrepStep::Cut(Slicing::Square));
    }

    #[test]
    fn test_deep_dish_keeps_default_bake() {
        assert_eq!(
            ChicagoStyleCheesePizza.bake(),
            PrepStep::Bake {
                minutes: 25,
                degrees: 350
            }
        );
    }
}
