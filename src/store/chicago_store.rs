//! Chicago store: deep dish pizzas.

use super::{MenuEntry, PizzaStore};
use crate::model::{ChicagoStyleCheesePizza, ChicagoStylePepperoniPizza};

static MENU: [MenuEntry; 2] = [
    MenuEntry::of::<ChicagoStyleCheesePizza>("cheese"),
    MenuEntry::of::<ChicagoStylePepperoniPizza>("pepperoni"),
];

/// The Chicago franchise store.
///
/// Sells `cheese` too, but as deep dish: the same identifier maps to
/// [`ChicagoStyleCheesePizza`] here and to a thin crust pizza in the
/// [`NyPizzaStore`](super::NyPizzaStore).
#[derive(Debug, Clone, Copy, Default)]
pub struct ChicagoPizzaStore;

impl PizzaStore for ChicagoPizzaStore {
    fn name(&self) -> &'static str {
        "Chicago Pizza Store"
    }

    fn menu(&self) -> &'static [MenuEntry] {
        &MENU
    }
}
