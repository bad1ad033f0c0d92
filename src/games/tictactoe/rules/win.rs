//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).player())
}

/// Returns the first completed line, if any.
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(Board::new(), |board, pos| board.with_mark(*pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(player, &line);
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
                assert_eq!(winning_line(&board), Some(line));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter])
            .with_mark(Position::TopRight, Player::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X
        // X O O
        // O X X
        let board = board_with(
            Player::X,
            &[
                Position::TopLeft,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
        );
        let board = [
            Position::TopCenter,
            Position::Center,
            Position::MiddleRight,
            Position::BottomLeft,
        ]
        .iter()
        .fold(board, |b, pos| b.with_mark(*pos, Player::O));

        assert_eq!(board.occupied_count(), 9);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(
            Player::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        assert_eq!(check_winner(&board), Some(Player::O));
        assert_eq!(
            winning_line(&board),
            Some([Position::TopRight, Position::Center, Position::BottomLeft])
        );
    }

    /// Owners of every complete row, column and diagonal, found by index
    /// arithmetic on the row-major squares.
    fn scan_lines(squares: &[Square; 9]) -> Vec<Player> {
        let mut triples = Vec::new();
        for i in 0..3 {
            triples.push([i * 3, i * 3 + 1, i * 3 + 2]);
            triples.push([i, i + 3, i + 6]);
        }
        triples.push([0, 4, 8]);
        triples.push([2, 4, 6]);

        triples
            .into_iter()
            .filter_map(|[a, b, c]| match squares[a] {
                Square::Occupied(p) if squares[b] == squares[a] && squares[c] == squares[a] => {
                    Some(p)
                }
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_all_boards_match_line_scan() {
        for code in 0..3usize.pow(9) {
            let mut board = Board::new();
            let mut rest = code;
            for pos in Position::ALL {
                let square = match rest % 3 {
                    0 => Square::Empty,
                    1 => Square::Occupied(Player::X),
                    _ => Square::Occupied(Player::O),
                };
                board.set(pos, square);
                rest /= 3;
            }

            let owners = scan_lines(board.squares());
            match check_winner(&board) {
                None => assert!(owners.is_empty(), "missed a line on board {}", code),
                Some(p) => assert!(owners.contains(&p), "phantom winner on board {}", code),
            }
            match winning_line(&board) {
                None => assert!(owners.is_empty()),
                Some(line) => {
                    let sq = board.get(line[0]);
                    assert_ne!(sq, Square::Empty);
                    assert!(line.iter().all(|pos| board.get(*pos) == sq));
                }
            }
        }
    }
}
