//! Game state management.

use std::fmt;

use crate::game::rng::Rng;
use crate::game::{Digit, Ledger, NumberPool, OpId, Operator, Selection};

/// Number of digits dealt to each side.
pub const POOL_SIZE: usize = 6;

/// One of the two pans of the scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The left pan.
    Left,
    /// The right pan.
    Right,
}

impl Side {
    /// Both sides, in display order.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// The opposite side.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-side state: the digits originally dealt, the remaining pool, and the
/// ledger of committed operations.
#[derive(Debug, Clone)]
pub struct SideState {
    pub(crate) dealt: [Digit; POOL_SIZE],
    pub(crate) pool: NumberPool,
    pub(crate) ledger: Ledger,
}

impl SideState {
    fn deal(rng: &mut Rng) -> Self {
        let dealt = std::array::from_fn(|_| Digit::draw(rng));
        Self {
            dealt,
            pool: NumberPool::new(dealt.to_vec()),
            ledger: Ledger::default(),
        }
    }

    /// The six digits this side was dealt.
    #[must_use]
    pub const fn dealt(&self) -> &[Digit; POOL_SIZE] {
        &self.dealt
    }

    /// Digits still available for selection.
    #[must_use]
    pub const fn pool(&self) -> &NumberPool {
        &self.pool
    }

    /// Operations committed on this side.
    #[must_use]
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }
}

/// Complete game state: both sides, the pending selection, and the
/// lifecycle flags.
///
/// All transitions are total. Malformed input (a digit absent from the
/// active pool, an unknown operation id, a commit with an incomplete
/// selection) is a guarded no-op, never an error.
#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) left: SideState,
    pub(crate) right: SideState,
    pub(crate) active_side: Side,
    pub(crate) selection: Selection,
    pub(crate) game_complete: bool,
    pub(crate) show_balance_result: bool,
    pub(crate) rng: Rng,
}

impl GameState {
    /// Deal a new puzzle from the given seed.
    ///
    /// The same seed always deals the same pools, and drives every
    /// subsequent in-session re-deal (see [`GameState::new_game`]).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = Rng::new(seed);
        let left = SideState::deal(&mut rng);
        let right = SideState::deal(&mut rng);
        Self {
            left,
            right,
            active_side: Side::Left,
            selection: Selection::default(),
            game_complete: false,
            show_balance_result: false,
            rng,
        }
    }

    /// State of the given side.
    #[must_use]
    pub const fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// The side the pending selection belongs to.
    #[must_use]
    pub const fn active_side(&self) -> Side {
        self.active_side
    }

    /// The pending operand and operator picks.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Whether the game has ended (balanced or given up).
    #[must_use]
    pub const fn game_complete(&self) -> bool {
        self.game_complete
    }

    /// Whether the balance result view is visible.
    #[must_use]
    pub const fn show_balance_result(&self) -> bool {
        self.show_balance_result
    }

    /// Select or toggle a digit value on the given side.
    ///
    /// Activates `side`; switching sides drops any pending selection so the
    /// slots can only ever hold values from the active pool. Within the
    /// active side, a value already occupying a slot toggles off, otherwise
    /// it fills the first empty slot (no-op when both are full or the value
    /// is not in the pool).
    pub fn select_number(&mut self, value: Digit, side: Side) {
        if side != self.active_side {
            self.active_side = side;
            self.selection.clear();
        }
        if !self.side(side).pool.contains(value) {
            return;
        }
        self.selection.toggle_number(value);
    }

    /// Set the pending operator for the active side.
    pub fn select_operator(&mut self, operator: Operator) {
        self.selection.operator = Some(operator);
    }

    /// Commit the pending selection into an operation on `side`.
    ///
    /// No-op unless `side` is the active side and both operands and the
    /// operator are set. On success the result is appended to the side's
    /// ledger, exactly one occurrence of each operand value leaves the
    /// pool, and the selection is cleared.
    pub fn commit_operation(&mut self, side: Side) {
        if side != self.active_side {
            return;
        }
        let Selection {
            operand1: Some(a),
            operand2: Some(b),
            operator: Some(op),
        } = self.selection
        else {
            return;
        };

        let state = self.side_mut(side);
        if !state.pool.take_one(a) {
            return;
        }
        if !state.pool.take_one(b) {
            state.pool.put_back(a);
            return;
        }
        state.ledger.commit(a, b, op);
        self.selection.clear();
    }

    /// Remove the operation with `id` from `side`, returning its operands
    /// to the pool. No-op if the id is unknown. Selection state is left
    /// untouched.
    pub fn remove_operation(&mut self, id: OpId, side: Side) {
        let state = self.side_mut(side);
        if let Some(op) = state.ledger.remove(id) {
            state.pool.put_back(op.operand1);
            state.pool.put_back(op.operand2);
        }
    }

    /// Current (left, right) totals, recomputed from the ledgers.
    #[must_use]
    pub fn totals(&self) -> (f64, f64) {
        (self.left.ledger.total(), self.right.ledger.total())
    }

    /// Whether both totals are exactly equal.
    #[must_use]
    #[allow(clippy::float_cmp)] // exact equality is the balance rule
    pub fn is_balanced(&self) -> bool {
        let (left, right) = self.totals();
        left == right
    }

    /// Reveal the balance result; completes the game when balanced.
    ///
    /// The presentation layer, not this method, is responsible for
    /// disabling the affordance once the game is complete.
    pub fn check_balance(&mut self) {
        self.show_balance_result = true;
        if self.is_balanced() {
            self.game_complete = true;
        }
    }

    /// End the game without balancing and hide the result view.
    pub fn give_up(&mut self) {
        self.game_complete = true;
        self.show_balance_result = false;
    }

    /// Hide the balance result view.
    pub fn dismiss_result(&mut self) {
        self.show_balance_result = false;
    }

    /// Deal a fresh puzzle, clearing ledgers, selection, and flags.
    ///
    /// Draws from the ongoing seeded stream, so a whole session is
    /// reproducible from the initial seed.
    pub fn new_game(&mut self) {
        self.left = SideState::deal(&mut self.rng);
        self.right = SideState::deal(&mut self.rng);
        self.active_side = Side::Left;
        self.selection = Selection::default();
        self.game_complete = false;
        self.show_balance_result = false;
    }
}
