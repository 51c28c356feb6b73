//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionTransition};
use crate::state::GameState;

use super::ActionResult;
use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
use super::invariants;

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the game state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Executes an action through the transition pipeline and returns ActionResult.
///
/// Routes each action type to its transition, then checks the structural
/// invariants of the resulting state. Rolling back on error is the caller's job.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut GameState,
) -> Result<ActionResult, ExecuteError> {
    let result = match action {
        Action::AddToCart(transition) => {
            let slot = drive_transition(transition, state).map_err(ExecuteError::Cart)?;
            ActionResult::AddedToCart { slot }
        }
        Action::RemoveFromCart(transition) => {
            let returned = drive_transition(transition, state).map_err(ExecuteError::Cart)?;
            ActionResult::ReturnedToStockroom(returned)
        }
        Action::PlaceOnShelf(transition) => {
            let item_id = drive_transition(transition, state).map_err(ExecuteError::Shelf)?;
            ActionResult::Placed(item_id)
        }
        Action::TakeFromShelf(transition) => {
            let item_id = drive_transition(transition, state).map_err(ExecuteError::Shelf)?;
            ActionResult::Taken(item_id)
        }
        Action::AddCurrency(transition) => {
            let total = drive_transition(transition, state).map_err(ExecuteError::Currency)?;
            ActionResult::Currency { total }
        }
        Action::SwitchAisle(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::Aisle)?;
            ActionResult::AisleSwitched(transition.aisle_id.clone())
        }
    };

    invariants::check(state)?;
    Ok(result)
}
