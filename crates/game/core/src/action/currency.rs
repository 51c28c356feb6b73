use crate::action::ActionTransition;
use crate::error::{ErrorSeverity, GameError};
use crate::state::GameState;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurrencyError {
    #[error("adding {amount} to {total} would overflow the currency total")]
    Overflow { total: i64, amount: i64 },
}

impl GameError for CurrencyError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            CurrencyError::Overflow { .. } => "CURRENCY_OVERFLOW",
        }
    }
}

/// Adds money to the player's total.
///
/// The sign is not checked: negative amounts lower the total. Only a result
/// outside the `i64` range is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AddCurrencyAction {
    pub amount: i64,
}

impl AddCurrencyAction {
    pub fn new(amount: i64) -> Self {
        Self { amount }
    }

    fn new_total(&self, state: &GameState) -> Result<i64, CurrencyError> {
        let total = state.currency.total;
        total
            .checked_add(self.amount)
            .ok_or(CurrencyError::Overflow {
                total,
                amount: self.amount,
            })
    }
}

impl ActionTransition for AddCurrencyAction {
    type Error = CurrencyError;
    /// Total after the addition.
    type Result = i64;

    fn pre_validate(&self, state: &GameState) -> Result<(), Self::Error> {
        self.new_total(state).map(|_| ())
    }

    fn apply(&self, state: &mut GameState) -> Result<Self::Result, Self::Error> {
        state.currency.total = self.new_total(state)?;
        Ok(state.currency.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_amounts() {
        let mut state = GameState::default();

        AddCurrencyAction::new(10).apply(&mut state).unwrap();
        let total = AddCurrencyAction::new(5).apply(&mut state).unwrap();

        assert_eq!(total, 15);
        assert_eq!(state.currency.total, 15);
    }

    #[test]
    fn negative_amounts_are_applied_unchecked() {
        let mut state = GameState::default();

        let total = AddCurrencyAction::new(-4).apply(&mut state).unwrap();

        assert_eq!(total, -4);
    }

    #[test]
    fn rejects_totals_outside_i64() {
        let mut state = GameState::default();
        AddCurrencyAction::new(i64::MAX).apply(&mut state).unwrap();

        let err = AddCurrencyAction::new(1).pre_validate(&state).unwrap_err();
        assert_eq!(
            err,
            CurrencyError::Overflow {
                total: i64::MAX,
                amount: 1,
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(
            AddCurrencyAction::new(1).apply(&mut state),
            Err(CurrencyError::Overflow {
                total: i64::MAX,
                amount: 1,
            })
        );
        assert_eq!(state.currency.total, i64::MAX);

        state.currency.total = i64::MIN;
        assert!(AddCurrencyAction::new(-1).pre_validate(&state).is_err());
    }
}
