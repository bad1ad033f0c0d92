//! Single-mark invariant: each snapshot adds exactly one mark of the right player.

use super::super::{GameState, Player, Square};
use super::Invariant;

/// Invariant: `history[k]` differs from `history[k - 1]` in exactly one
/// square, which went from empty to the mark of the player on turn `k - 1`.
///
/// Together with [`StartsEmptyInvariant`](super::StartsEmptyInvariant) this
/// makes turn parity equal to the number of marks on every snapshot.
pub struct SingleMarkInvariant;

impl Invariant<GameState> for SingleMarkInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(turn, pair)| {
                let (prev, next) = (&pair[0], &pair[1]);
                match prev.diff(next).as_slice() {
                    [pos] => {
                        prev.get(*pos) == Square::Empty
                            && next.get(*pos) == Square::Occupied(Player::for_turn(turn))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark, alternating X then O"
    }
}
