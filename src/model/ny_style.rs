//! New York style pizzas: thin crust, cut into diagonal slices.

use super::pizza::Pizza;

/// NY style sauce and cheese pizza.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NyStyleCheesePizza;

impl Pizza for NyStyleCheesePizza {
    fn name(&self) -> &str {
        "NY Style Sauce and Cheese Pizza"
    }

    fn dough(&self) -> &str {
        "Thin Crust Dough"
    }

    fn sauce(&self) -> &str {
        "Marinara Sauce"
    }

    fn toppings(&self) -> &[&'static str] {
        &["Grated Reggiano Cheese"]
    }
}

/// NY style white clam pizza.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NyStyleClamPizza;

impl Pizza for NyStyleClamPizza {
    fn name(&self) -> &str {
        "NY Style Clam Pizza"
    }

    fn dough(&self) -> &str {
        "Thin Crust Dough"
    }

    fn sauce(&self) -> &str {
        "White Garlic Sauce"
    }

    fn toppings(&self) -> &[&'static str] {
        &["Grated Reggiano Cheese", "Fresh Clams from Long Island Sound"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PrepStep, Slicing};

    #[test]
    fn test_cheese_describe() {
        assert_eq!(
            NyStyleCheesePizza.describe(),
            "NY Style Sauce and Cheese Pizza (Thin Crust Dough, Marinara Sauce; topped with Grated Reggiano Cheese)"
        );
    }

    #[test]
    fn test_ny_style_cuts_diagonally() {
        assert_eq!(NyStyleCheesePizza.cut(), PrepStep::Cut(Slicing::Diagonal));
        assert_eq!(NyStyleClamPizza.cut(), PrepStep::Cut(Slicing::Diagonal));
    }
}
