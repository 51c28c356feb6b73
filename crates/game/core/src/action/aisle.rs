use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{AisleId, GameState};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AisleError {
    #[error("aisle {0} does not exist")]
    UnknownAisle(AisleId),
}

impl GameError for AisleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            AisleError::UnknownAisle(_) => "AISLE_UNKNOWN",
        }
    }
}

/// Brings another aisle into view.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchAisleAction {
    pub aisle_id: AisleId,
}

impl SwitchAisleAction {
    pub fn new(aisle_id: impl Into<AisleId>) -> Self {
        Self {
            aisle_id: aisle_id.into(),
        }
    }
}

impl ActionTransition for SwitchAisleAction {
    type Error = AisleError;
    type Result = ();

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        if !state.sales_floor.contains_aisle(self.aisle_id.as_str()) {
            return Err(AisleError::UnknownAisle(self.aisle_id.clone()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        state.sales_floor.current_aisle_id = self.aisle_id.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Aisle, Shelf};

    #[test]
    fn switches_between_existing_aisles() {
        let mut state = GameState::default();
        state.sales_floor.aisles.push(Aisle::new(
            "aisle-2",
            "Vegetables",
            vec![Shelf::uniform("aisle-2-shelf-1", 2, 4)],
        ));

        let action = SwitchAisleAction::new("aisle-2");
        action.pre_validate(&state).unwrap();
        action.apply(&mut state).unwrap();

        assert_eq!(state.sales_floor.current_aisle_id, "aisle-2");
        assert_eq!(state.sales_floor.current_aisle().unwrap().name, "Vegetables");
    }

    #[test]
    fn unknown_aisle_is_rejected() {
        let state = GameState::default();

        let err = SwitchAisleAction::new("non-existent-aisle")
            .pre_validate(&state)
            .unwrap_err();

        assert_eq!(err, AisleError::UnknownAisle("non-existent-aisle".into()));
        assert_eq!(err.to_string(), "aisle non-existent-aisle does not exist");
    }
}
