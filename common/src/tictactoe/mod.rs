mod board;
mod bot_controller;
mod game_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotInput, COMPUTER_WIN_SCORE, DRAW_SCORE, Evaluation, HUMAN_WIN_SCORE, ScoredMove, best_move,
    calculate_move, evaluate, score_moves,
};
pub use game_state::{TicTacToeGameState, TurnState};
pub use types::{BOARD_SIDE, CELL_COUNT, GameOutcome, Mark, Player, WINNING_LINES, WinningLine};
pub use win_detector::{check_draw, check_win, check_win_with_line};
