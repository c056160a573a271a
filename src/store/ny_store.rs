//! New York store: thin crust pizzas.

use super::{MenuEntry, PizzaStore};
use crate::model::{NyStyleCheesePizza, NyStyleClamPizza};

static MENU: [MenuEntry; 2] = [
    MenuEntry::of::<NyStyleCheesePizza>("cheese"),
    MenuEntry::of::<NyStyleClamPizza>("clam"),
];

/// The New York franchise store.
///
/// | identifier | variant                 |
/// |------------|-------------------------|
/// | `cheese`   | [`NyStyleCheesePizza`]  |
/// | `clam`     | [`NyStyleClamPizza`]    |
#[derive(Debug, Clone, Copy, Default)]
pub struct NyPizzaStore;

impl PizzaStore for NyPizzaStore {
    fn name(&self) -> &'static str {
        "New York Pizza Store"
    }

    fn menu(&self) -> &'static [MenuEntry] {
        &MENU
    }
}
