use super::board::Board;
use super::types::{Player, WINNING_LINES, WinningLine};

pub fn check_win(board: &Board, player: Player) -> Option<WinningLine> {
    let mark = player.mark();
    WINNING_LINES
        .iter()
        .position(|line| line.iter().all(|&cell| board.get(cell) == Some(mark)))
        .map(WinningLine::new)
}

/// Human lines are reported first; on a reachable board at most one player can hold a line.
pub fn check_win_with_line(board: &Board) -> Option<(Player, WinningLine)> {
    [Player::Human, Player::Computer]
        .into_iter()
        .find_map(|player| check_win(board, player).map(|line| (player, line)))
}

pub fn check_draw(board: &Board) -> bool {
    board.empty_cells().is_empty() && check_win_with_line(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::bot_controller::best_move;
    use crate::tictactoe::types::CELL_COUNT;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_row_column_and_diagonal_wins() {
        assert_eq!(check_win(&board("XXX|OO.|..."), Player::Human).map(|l| l.index), Some(0));
        assert_eq!(check_win(&board("XO.|XO.|.O."), Player::Computer).map(|l| l.index), Some(4));
        assert_eq!(check_win(&board("X.O|XO.|O.X"), Player::Computer).map(|l| l.index), Some(7));
        assert_eq!(check_win(&board("XXX|OO.|..."), Player::Computer), None);
    }

    #[test]
    fn test_first_line_in_enumeration_order_is_reported() {
        // Row 0 and column 0 both complete.
        let b = board("XXX|XOO|XOO");
        let line = check_win(&b, Player::Human).unwrap();
        assert_eq!(line.index, 0);
        assert_eq!(line.cells, [0, 1, 2]);
    }

    #[test]
    fn test_no_win_on_empty_board() {
        let b = Board::new();
        assert_eq!(check_win_with_line(&b), None);
        assert!(!check_draw(&b));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let b = board("XOX|XOO|OXX");
        assert!(b.is_full());
        assert_eq!(check_win_with_line(&b), None);
        assert!(check_draw(&b));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let b = board("XOX|OXO|OXX");
        assert!(b.is_full());
        assert_eq!(check_win(&b, Player::Human).map(|l| l.index), Some(6));
        assert!(!check_draw(&b));
    }

    fn collect_reachable(board: &mut Board, seen: &mut Vec<Board>) {
        seen.push(*board);
        if check_win_with_line(board).is_some() {
            return;
        }
        let player = board.next_player();
        for cell in board.empty_cells() {
            board.place(cell, player);
            collect_reachable(board, seen);
            board.clear(cell);
        }
    }

    #[test]
    fn test_never_both_players_win_on_reachable_boards() {
        let mut seen = Vec::new();
        collect_reachable(&mut Board::new(), &mut seen);

        for b in &seen {
            let human = check_win(b, Player::Human);
            let computer = check_win(b, Player::Computer);
            assert!(human.is_none() || computer.is_none(), "both won on {}", b);

            if b.played_count() == CELL_COUNT && human.is_none() && computer.is_none() {
                assert!(check_draw(b), "full board {} should be a draw", b);
            }
        }
    }

    #[test]
    fn test_engine_reply_never_completes_line_for_both() {
        let mut b = board("XX.|OO.|...");
        let cell = best_move(&b, Player::Human).unwrap();
        b.place(cell, Player::Human);
        assert!(check_win(&b, Player::Human).is_some());
        assert!(check_win(&b, Player::Computer).is_none());
    }
}
