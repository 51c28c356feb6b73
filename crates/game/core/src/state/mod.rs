//! Authoritative game state representation.
//!
//! This module owns the data structures describing the sales floor, the
//! stockroom, the cart and the player's money. Clients read this state freely
//! but mutate it exclusively through [`GameEngine`](crate::engine::GameEngine).
pub mod delta;
pub mod types;

pub use delta::{StateDelta, StateFields};
pub use types::{
    Aisle, AisleId, Cart, GameCurrency, ItemId, SalesFloor, Shelf, ShelfPosition, StackedItem,
    Stockroom,
};

use crate::config::GameConfig;

/// Aggregate root for one game session.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub sales_floor: SalesFloor,
    pub stockroom: Stockroom,
    pub cart: Cart,
    pub currency: GameCurrency,
}

impl GameState {
    /// Id of the aisle every new session starts in.
    pub const STARTING_AISLE: &'static str = "aisle-1";

    /// Creates the starting state of a new session.
    ///
    /// The sales floor and stockroom contents are fixed; only the cart
    /// dimensions come from `config`.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            sales_floor: starting_sales_floor(),
            stockroom: starting_stockroom(),
            cart: Cart::new(config.cart_max_slots, config.initial_stack_size),
            currency: GameCurrency::default(),
        }
    }

    /// Creates a state from explicit components (for scenarios and tests).
    pub fn from_parts(
        sales_floor: SalesFloor,
        stockroom: Stockroom,
        cart: Cart,
        currency: GameCurrency,
    ) -> Self {
        Self {
            sales_floor,
            stockroom,
            cart,
            currency,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

fn starting_sales_floor() -> SalesFloor {
    let fruits = Aisle::new(
        GameState::STARTING_AISLE,
        "Fruits",
        vec![
            // Red apples, green apples
            Shelf::uniform("aisle-1-shelf-1", 2, 5),
            // Mangos, pears, peaches
            Shelf::uniform("aisle-1-shelf-2", 3, 3),
        ],
    );

    SalesFloor {
        aisles: vec![fruits],
        current_aisle_id: AisleId::from(GameState::STARTING_AISLE),
    }
}

fn starting_stockroom() -> Stockroom {
    const STARTING_STOCK: [(&str, u32); 10] = [
        ("red-apple", 10),
        ("green-apple", 10),
        ("mango", 8),
        ("pear", 8),
        ("peach", 8),
        ("potato", 15),
        ("carrot", 15),
        ("broccoli", 10),
        ("milk", 12),
        ("bread", 10),
    ];

    Stockroom::new(
        STARTING_STOCK
            .iter()
            .map(|&(item_id, quantity)| StackedItem::new(item_id, quantity))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_seeds_one_aisle_with_five_positions() {
        let state = GameState::default();

        assert_eq!(state.sales_floor.aisles.len(), 1);
        assert_eq!(state.sales_floor.current_aisle_id, "aisle-1");

        let capacities: Vec<u32> = state
            .sales_floor
            .positions()
            .map(|position| position.max_capacity)
            .collect();
        assert_eq!(capacities, vec![5, 5, 3, 3, 3]);
        assert!(state.sales_floor.positions().all(ShelfPosition::is_empty));
    }

    #[test]
    fn default_state_stocks_ten_items() {
        let state = GameState::default();

        assert_eq!(state.stockroom.inventory.len(), 10);
        assert_eq!(state.stockroom.quantity_of("red-apple"), 10);
        assert_eq!(state.stockroom.quantity_of("potato"), 15);
        assert_eq!(state.stockroom.quantity_of("milk"), 12);
        assert_eq!(state.stockroom.quantity_of("caviar"), 0);
    }

    #[test]
    fn cart_dimensions_follow_config() {
        let state = GameState::new(&GameConfig::with_cart(2, 5));

        assert!(state.cart.is_empty());
        assert_eq!(state.cart.max_slots, 2);
        assert_eq!(state.cart.initial_stack_size, 5);
        assert_eq!(state.currency.total, 0);
    }
}
