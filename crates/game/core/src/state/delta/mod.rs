mod bitmask;

use crate::action::Action;
use crate::state::GameState;

pub use bitmask::StateFields;

/// Minimal description of an executed action's impact on the state.
///
/// The delta stores which regions changed, not their values. Callers that
/// need the new values read them from the state they already hold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StateDelta {
    /// The action that caused this state transition.
    pub action: Action,

    /// Regions of the state that differ between before and after.
    pub fields: StateFields,
}

impl StateDelta {
    /// Creates a delta by comparing two game states region by region.
    pub fn from_states(action: Action, before: &GameState, after: &GameState) -> Self {
        let mut fields = StateFields::empty();

        if before.cart != after.cart {
            fields |= StateFields::CART;
        }
        if before.stockroom != after.stockroom {
            fields |= StateFields::STOCKROOM;
        }
        if before.sales_floor.aisles != after.sales_floor.aisles {
            fields |= StateFields::SHELVES;
        }
        if before.sales_floor.current_aisle_id != after.sales_floor.current_aisle_id {
            fields |= StateFields::CURRENT_AISLE;
        }
        if before.currency != after.currency {
            fields |= StateFields::CURRENCY;
        }

        Self { action, fields }
    }

    /// Returns true if no state changes occurred (no-op action).
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn touches(&self, fields: StateFields) -> bool {
        self.fields.intersects(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{AddCurrencyAction, SwitchAisleAction};

    #[test]
    fn identical_states_produce_empty_delta() {
        let state = GameState::default();
        let action = Action::SwitchAisle(SwitchAisleAction::new("aisle-1"));

        let delta = StateDelta::from_states(action, &state, &state.clone());

        assert!(delta.is_empty());
    }

    #[test]
    fn currency_change_sets_only_currency_bit() {
        let before = GameState::default();
        let mut after = before.clone();
        after.currency.total = 7;

        let delta = StateDelta::from_states(
            Action::AddCurrency(AddCurrencyAction::new(7)),
            &before,
            &after,
        );

        assert_eq!(delta.fields, StateFields::CURRENCY);
        assert!(delta.touches(StateFields::CURRENCY | StateFields::CART));
        assert!(!delta.touches(StateFields::SHELVES));
    }

    #[test]
    fn stock_moves_flag_both_containers() {
        let before = GameState::default();
        let mut after = before.clone();
        after.stockroom.withdraw("mango", 2);
        after.cart.push_slot("mango".into(), 2);

        let delta = StateDelta::from_states(
            Action::AddCurrency(AddCurrencyAction::new(0)),
            &before,
            &after,
        );

        assert_eq!(delta.fields, StateFields::CART | StateFields::STOCKROOM);
    }
}
