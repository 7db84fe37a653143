use std::fmt;

pub const CELL_COUNT: usize = 9;
pub const BOARD_SIDE: usize = 3;

/// Cell indices of every winning line: rows, columns, then both diagonals.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [6, 4, 2],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Human => Mark::Human,
            Player::Computer => Mark::Computer,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Computer => write!(f, "Computer"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Mark {
    pub fn player(&self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Human => Some(Player::Human),
            Mark::Computer => Some(Player::Computer),
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::Human => 'X',
            Mark::Computer => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c.to_ascii_uppercase() {
            '.' | '-' | '_' | ' ' => Some(Mark::Empty),
            'X' => Some(Mark::Human),
            'O' => Some(Mark::Computer),
            _ => None,
        }
    }
}

/// One of the eight fixed lines, identified by its position in [`WINNING_LINES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub index: usize,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            cells: WINNING_LINES[index],
        }
    }

    pub fn contains(&self, cell: usize) -> bool {
        self.cells.contains(&cell)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win { player: Player, line: WinningLine },
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }
}
