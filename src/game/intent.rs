//! User intents.
//!
//! Every discrete interaction the presentation layer can surface is one
//! [`Intent`] variant; [`GameState::apply`] dispatches them to the reducer
//! operations. Intents are processed synchronously, one at a time, in the
//! order they are issued.

use crate::game::{Digit, GameState, OpId, Operator, Side};

/// A discrete user intent fed into the game core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Select or toggle a digit value on the given side.
    SelectNumber {
        /// The digit value picked.
        value: Digit,
        /// The side it was picked on.
        side: Side,
    },
    /// Choose the pending operator for the active side.
    SelectOperator(Operator),
    /// Commit the pending selection into an operation on the given side.
    Commit(Side),
    /// Remove a committed operation, returning its operands to the pool.
    Remove {
        /// Id of the operation to remove.
        id: OpId,
        /// The side whose ledger holds it.
        side: Side,
    },
    /// Reveal the balance result, completing the game when totals match.
    CheckBalance,
    /// End the game without balancing.
    GiveUp,
    /// Hide the balance result view.
    DismissResult,
    /// Deal a fresh puzzle.
    NewGame,
}

impl GameState {
    /// Apply a single intent.
    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::SelectNumber { value, side } => self.select_number(value, side),
            Intent::SelectOperator(operator) => self.select_operator(operator),
            Intent::Commit(side) => self.commit_operation(side),
            Intent::Remove { id, side } => self.remove_operation(id, side),
            Intent::CheckBalance => self.check_balance(),
            Intent::GiveUp => self.give_up(),
            Intent::DismissResult => self.dismiss_result(),
            Intent::NewGame => self.new_game(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_matches_direct_calls() {
        let mut via_intent = GameState::new(11);
        let mut direct = GameState::new(11);

        let value = via_intent.side(Side::Left).pool().digits()[0];
        via_intent.apply(Intent::SelectNumber {
            value,
            side: Side::Left,
        });
        via_intent.apply(Intent::SelectOperator(Operator::Add));
        direct.select_number(value, Side::Left);
        direct.select_operator(Operator::Add);

        assert_eq!(via_intent.selection(), direct.selection());
    }

    #[test]
    fn test_apply_full_round() {
        let mut state = GameState::new(11);
        state.apply(Intent::CheckBalance);
        // Empty ledgers are balanced, so the round ends immediately
        assert!(state.game_complete());
        state.apply(Intent::NewGame);
        assert!(!state.game_complete());
    }
}
