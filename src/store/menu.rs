//! Static identifier → constructor tables.
//!
//! Each concrete store declares its menu as a `static` array of [`MenuEntry`].
//! Adding a pizza to a store means adding one entry; the lookup code in
//! [`PizzaStore::create_pizza`](super::PizzaStore::create_pizza) never changes.
//!
//! ```rust
//! use pizza_store::model::{NyStyleCheesePizza, Pizza};
//! use pizza_store::store::menu::{self, MenuEntry};
//!
//! static MENU: [MenuEntry; 1] = [MenuEntry::of::<NyStyleCheesePizza>("cheese")];
//!
//! let entry = menu::lookup(&MENU, "cheese").unwrap();
//! assert_eq!(entry.build().name(), "NY Style Sauce and Cheese Pizza");
//! assert!(menu::lookup(&MENU, "Cheese").is_none());
//! ```

use crate::model::Pizza;

/// Builds a fresh, caller-owned pizza.
pub type PizzaConstructor = fn() -> Box<dyn Pizza>;

/// One recognized identifier and the variant it builds.
#[derive(Debug, Clone, Copy)]
pub struct MenuEntry {
    pub kind: &'static str,
    build: PizzaConstructor,
}

impl MenuEntry {
    pub const fn new(kind: &'static str, build: PizzaConstructor) -> Self {
        Self { kind, build }
    }

    /// Entry building the default value of `P`.
    pub const fn of<P: Pizza + Default + 'static>(kind: &'static str) -> Self {
        Self::new(kind, build_default::<P>)
    }

    pub fn build(&self) -> Box<dyn Pizza> {
        (self.build)()
    }
}

fn build_default<P: Pizza + Default + 'static>() -> Box<dyn Pizza> {
    Box::new(P::default())
}

/// Finds the entry for `kind`. Exact, case-sensitive comparison.
///
/// Menus are expected to list each identifier once (see [`first_duplicate`]);
/// if one does not, the earliest entry wins.
pub fn lookup<'a>(menu: &'a [MenuEntry], kind: &str) -> Option<&'a MenuEntry> {
    menu.iter().find(|entry| entry.kind == kind)
}

/// Returns the first identifier that appears more than once in `menu`.
pub fn first_duplicate(menu: &[MenuEntry]) -> Option<&'static str> {
    menu.iter().enumerate().find_map(|(i, entry)| {
        menu[..i]
            .iter()
            .any(|earlier| earlier.kind == entry.kind)
            .then_some(entry.kind)
    })
}
