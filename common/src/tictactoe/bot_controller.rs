use super::board::Board;
use super::types::Player;
use super::win_detector::check_win;

pub const HUMAN_WIN_SCORE: i32 = -10;
pub const COMPUTER_WIN_SCORE: i32 = 10;
pub const DRAW_SCORE: i32 = 0;

pub struct BotInput {
    pub board: Board,
    pub current_player: Player,
}

impl BotInput {
    pub fn from_board(board: &Board) -> Self {
        Self {
            board: *board,
            current_player: board.next_player(),
        }
    }
}

/// Result of searching a position. `cell` is `None` only for terminal boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub score: i32,
    pub cell: Option<usize>,
}

/// A candidate move together with the board it produces and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredMove {
    pub cell: usize,
    pub board: Board,
    pub score: i32,
}

pub fn calculate_move(input: BotInput) -> Option<usize> {
    best_move(&input.board, input.current_player)
}

pub fn best_move(board: &Board, player: Player) -> Option<usize> {
    evaluate(board, player).cell
}

/// Searches a private copy, the caller's board is left as it was.
pub fn evaluate(board: &Board, player: Player) -> Evaluation {
    let mut board = *board;
    minimax(&mut board, player)
}

pub fn score_moves(board: &Board, player: Player) -> Vec<ScoredMove> {
    if terminal_score(board).is_some() {
        return Vec::new();
    }

    let mut board = *board;
    board
        .empty_cells()
        .into_iter()
        .map(|cell| {
            board.place(cell, player);
            let score = minimax(&mut board, player.opponent()).score;
            let resulting = board;
            board.clear(cell);
            ScoredMove {
                cell,
                board: resulting,
                score,
            }
        })
        .collect()
}

fn terminal_score(board: &Board) -> Option<i32> {
    if check_win(board, Player::Human).is_some() {
        Some(HUMAN_WIN_SCORE)
    } else if check_win(board, Player::Computer).is_some() {
        Some(COMPUTER_WIN_SCORE)
    } else if board.is_full() {
        Some(DRAW_SCORE)
    } else {
        None
    }
}

fn is_better(player: Player, score: i32, best_score: i32) -> bool {
    match player {
        Player::Computer => score > best_score,
        Player::Human => score < best_score,
    }
}

fn minimax(board: &mut Board, player: Player) -> Evaluation {
    if let Some(score) = terminal_score(board) {
        return Evaluation { score, cell: None };
    }

    let mut best: Option<(usize, i32)> = None;

    for cell in board.empty_cells() {
        board.place(cell, player);
        let score = minimax(board, player.opponent()).score;
        board.clear(cell);

        // Equal scores never replace an earlier candidate.
        let replace = match best {
            None => true,
            Some((_, best_score)) => is_better(player, score, best_score),
        };
        if replace {
            best = Some((cell, score));
        }
    }

    match best {
        Some((cell, score)) => Evaluation {
            score,
            cell: Some(cell),
        },
        None => Evaluation {
            score: DRAW_SCORE,
            cell: None,
        },
    }
}
