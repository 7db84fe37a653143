use std::fmt;
use std::str::FromStr;

use super::types::{BOARD_SIDE, CELL_COUNT, Mark, Player, WinningLine};
use super::win_detector;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied()
    }

    pub fn is_empty(&self, cell: usize) -> bool {
        self.get(cell) == Some(Mark::Empty)
    }

    /// Panics in debug builds when the cell is out of range or already taken.
    pub fn place(&mut self, cell: usize, player: Player) {
        debug_assert!(self.is_empty(cell), "cell {} is not available", cell);
        self.cells[cell] = player.mark();
    }

    pub(crate) fn clear(&mut self, cell: usize) {
        self.cells[cell] = Mark::Empty;
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &mark)| mark == Mark::Empty)
            .map(|(cell, _)| cell)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn played_count(&self) -> usize {
        CELL_COUNT - self.count(Mark::Empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    /// The human always opens, so an even number of played cells means it is the human's turn.
    pub fn next_player(&self) -> Player {
        if self.played_count() % 2 == 0 {
            Player::Human
        } else {
            Player::Computer
        }
    }

    pub fn check_win(&self, player: Player) -> Option<WinningLine> {
        win_detector::check_win(self, player)
    }

    pub fn check_draw(&self) -> bool {
        win_detector::check_draw(self)
    }

    pub fn winner(&self) -> Option<(Player, WinningLine)> {
        win_detector::check_win_with_line(self)
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| *c != '\n' && *c != '|').collect();
        if chars.len() != CELL_COUNT {
            return Err(format!(
                "Board must have exactly {} cells, got {}",
                CELL_COUNT,
                chars.len()
            ));
        }

        let mut cells = [Mark::Empty; CELL_COUNT];
        for (i, c) in chars.into_iter().enumerate() {
            cells[i] = Mark::from_char(c)
                .ok_or_else(|| format!("Unexpected character '{}' at cell {}", c, i))?;
        }
        Ok(Self::from_marks(cells))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(BOARD_SIDE).enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            for mark in row {
                write!(f, "{}", mark.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_all_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), (0..CELL_COUNT).collect::<Vec<_>>());
        assert_eq!(board.played_count(), 0);
        assert_eq!(board.next_player(), Player::Human);
    }

    #[test]
    fn test_place_fills_cell_and_switches_turn() {
        let mut board = Board::new();
        board.place(4, Player::Human);

        assert!(!board.is_empty(4));
        assert_eq!(board.get(4), Some(Mark::Human));
        assert_eq!(board.empty_cells(), vec![0, 1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(board.next_player(), Player::Computer);
    }

    #[test]
    fn test_is_empty_out_of_range() {
        let board = Board::new();
        assert!(!board.is_empty(9));
        assert_eq!(board.get(42), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "not available")]
    fn test_place_on_taken_cell_panics_in_debug() {
        let mut board = Board::new();
        board.place(0, Player::Human);
        board.place(0, Player::Computer);
    }

    #[test]
    fn test_parse_and_display() {
        let board: Board = "XX.|OO.|...".parse().unwrap();
        assert_eq!(board.get(0), Some(Mark::Human));
        assert_eq!(board.get(3), Some(Mark::Computer));
        assert_eq!(board.empty_cells(), vec![2, 5, 6, 7, 8]);
        assert_eq!(board.to_string(), "XX.|OO.|...");

        let same: Board = "xx_oo____".parse().unwrap();
        assert_eq!(board, same);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XXO".parse::<Board>().is_err());
        assert!("XX.OO...Z".parse::<Board>().is_err());
    }

    #[test]
    fn test_from_marks_matches_parsed_board() {
        let mut cells = [Mark::Empty; CELL_COUNT];
        cells[0] = Mark::Human;
        cells[4] = Mark::Computer;
        let board = Board::from_marks(cells);
        assert_eq!(board, "X..|.O.|...".parse().unwrap());
        assert_eq!(board.next_player(), Player::Human);
    }

    #[test]
    fn test_is_full() {
        let board: Board = "XOXXOOOXX".parse().unwrap();
        assert!(board.is_full());
        assert!(board.empty_cells().is_empty());
    }
}
