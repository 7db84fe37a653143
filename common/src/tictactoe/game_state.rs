use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::types::{CELL_COUNT, GameOutcome, Mark, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    HumanTurn,
    ComputerTurn,
    GameOver(GameOutcome),
}

/// One game against the computer. Each instance owns its board.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    turn: TurnState,
    history: Vec<(Player, usize)>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: TurnState::HumanTurn,
            history: Vec::new(),
        }
    }

    /// Resumes from an arbitrary position. The history only covers moves made after this call.
    pub fn from_board(board: Board) -> Result<Self, String> {
        let human = board.count(Mark::Human);
        let computer = board.count(Mark::Computer);
        if human != computer && human != computer + 1 {
            return Err(format!(
                "Impossible position: {} human and {} computer marks",
                human, computer
            ));
        }

        if let (Some(human_line), Some(computer_line)) = (
            board.check_win(Player::Human),
            board.check_win(Player::Computer),
        ) {
            return Err(format!(
                "Impossible position: both players hold a line ({:?} and {:?})",
                human_line.cells, computer_line.cells
            ));
        }

        let winner = board.winner();
        if let Some((player, _)) = winner
            && player != board.next_player().opponent()
        {
            return Err(format!("Impossible position: {} won out of turn", player));
        }

        let outcome = evaluate_outcome(&board);
        let turn = match outcome {
            GameOutcome::InProgress => turn_for(board.next_player()),
            _ => TurnState::GameOver(outcome),
        };

        Ok(Self {
            board,
            turn,
            history: Vec::new(),
        })
    }

    pub fn new_game(&mut self) {
        *self = Self::new();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> TurnState {
        self.turn
    }

    pub fn outcome(&self) -> GameOutcome {
        match self.turn {
            TurnState::GameOver(outcome) => outcome,
            _ => GameOutcome::InProgress,
        }
    }

    pub fn current_player(&self) -> Option<Player> {
        match self.turn {
            TurnState::HumanTurn => Some(Player::Human),
            TurnState::ComputerTurn => Some(Player::Computer),
            TurnState::GameOver(_) => None,
        }
    }

    pub fn history(&self) -> &[(Player, usize)] {
        &self.history
    }

    pub fn last_move(&self) -> Option<(Player, usize)> {
        self.history.last().copied()
    }

    pub fn apply_human_move(&mut self, cell: usize) -> Result<GameOutcome, String> {
        self.place_mark(Player::Human, cell)
    }

    pub fn apply_computer_move(&mut self) -> Result<GameOutcome, String> {
        self.ensure_turn(Player::Computer)?;

        let cell = calculate_move(BotInput::from_board(&self.board))
            .ok_or_else(|| "No moves available".to_string())?;
        self.place_mark(Player::Computer, cell)
    }

    fn ensure_turn(&self, player: Player) -> Result<(), String> {
        match self.current_player() {
            None => Err("Game is already over".to_string()),
            Some(current) if current != player => Err("Not your turn".to_string()),
            Some(_) => Ok(()),
        }
    }

    fn place_mark(&mut self, player: Player, cell: usize) -> Result<GameOutcome, String> {
        self.ensure_turn(player)?;

        if cell >= CELL_COUNT {
            return Err("Position out of bounds".to_string());
        }

        if !self.board.is_empty(cell) {
            return Err("Cell is already marked".to_string());
        }

        self.board.place(cell, player);
        self.history.push((player, cell));

        let outcome = self.check_game_over(player);
        self.turn = match outcome {
            GameOutcome::InProgress => turn_for(player.opponent()),
            _ => TurnState::GameOver(outcome),
        };

        Ok(outcome)
    }

    fn check_game_over(&self, mover: Player) -> GameOutcome {
        if let Some(line) = self.board.check_win(mover) {
            return GameOutcome::Win {
                player: mover,
                line,
            };
        }

        if self.board.check_draw() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }
}

fn turn_for(player: Player) -> TurnState {
    match player {
        Player::Human => TurnState::HumanTurn,
        Player::Computer => TurnState::ComputerTurn,
    }
}

fn evaluate_outcome(board: &Board) -> GameOutcome {
    if let Some((player, line)) = board.winner() {
        GameOutcome::Win { player, line }
    } else if board.check_draw() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
