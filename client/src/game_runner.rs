use std::io::{self, BufRead, Write};

use tictactoe_common::log;
use tictactoe_common::tictactoe::{
    COMPUTER_WIN_SCORE, GameOutcome, HUMAN_WIN_SCORE, Player, TicTacToeGameState, TurnState,
    best_move, score_moves,
};

use crate::config::Config;
use crate::console_ui::{Command, HELP_TEXT, parse_command, render_board};

/// Terminal front end: reads commands, drives the game state and reports outcomes.
pub struct GameRunner<R: BufRead, W: Write> {
    config: Config,
    state: TicTacToeGameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> GameRunner<R, W> {
    pub fn with_state(config: Config, state: TicTacToeGameState, input: R, output: W) -> Self {
        Self {
            config,
            state,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", HELP_TEXT)?;
        self.start_turn()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            let command = match parse_command(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::Help => writeln!(self.output, "{}", HELP_TEXT)?,
                Command::NewGame => {
                    self.state.new_game();
                    log!("New game started");
                    self.start_turn()?;
                }
                Command::Hint => self.show_hint()?,
                Command::Play(cell) => self.play(cell)?,
            }
        }

        Ok(())
    }

    /// Engine against engine from an empty board.
    pub fn run_self_play(&mut self) -> io::Result<GameOutcome> {
        self.state.new_game();

        while let Some(player) = self.state.current_player() {
            let result = match player {
                Player::Human => match best_move(self.state.board(), Player::Human) {
                    Some(cell) => self.state.apply_human_move(cell),
                    None => Err("No moves available".to_string()),
                },
                Player::Computer => self.state.apply_computer_move(),
            };
            if let Err(e) = result {
                writeln!(self.output, "{}", e)?;
                break;
            }
            self.report_last_move()?;
        }

        self.report_board()?;
        let outcome = self.state.outcome();
        self.report_outcome(&outcome)?;
        Ok(outcome)
    }

    fn start_turn(&mut self) -> io::Result<()> {
        if self.state.turn() == TurnState::ComputerTurn {
            self.computer_turn()?;
        }
        self.report_board()?;
        self.report_outcome(&self.state.outcome())
    }

    fn play(&mut self, cell: usize) -> io::Result<()> {
        match self.state.apply_human_move(cell) {
            Ok(outcome) => {
                self.report_last_move()?;
                if !outcome.is_over() {
                    self.computer_turn()?;
                }
            }
            Err(e) => {
                // Rejected moves leave the game untouched.
                writeln!(self.output, "{}", e)?;
                return Ok(());
            }
        }

        self.report_board()?;
        self.report_outcome(&self.state.outcome())
    }

    fn computer_turn(&mut self) -> io::Result<()> {
        match self.state.apply_computer_move() {
            Ok(_) => self.report_last_move(),
            Err(e) => writeln!(self.output, "{}", e),
        }
    }

    fn show_hint(&mut self) -> io::Result<()> {
        if self.state.turn() != TurnState::HumanTurn {
            return writeln!(self.output, "Game is already over");
        }

        let moves = score_moves(self.state.board(), Player::Human);
        for scored in &moves {
            let verdict = match scored.score {
                HUMAN_WIN_SCORE => "you win",
                COMPUTER_WIN_SCORE => "you lose",
                _ => "draw",
            };
            writeln!(self.output, "  cell {}: {}", scored.cell, verdict)?;
        }
        if let Some(cell) = best_move(self.state.board(), Player::Human) {
            writeln!(self.output, "Best cell: {}", cell)?;
        }
        Ok(())
    }

    fn report_last_move(&mut self) -> io::Result<()> {
        let Some((player, cell)) = self.state.last_move() else {
            return Ok(());
        };
        log!("{} played cell {}", player, cell);
        let verb = match player {
            Player::Human => "You play",
            Player::Computer => "Computer plays",
        };
        writeln!(self.output, "{} {}", verb, cell)
    }

    fn report_board(&mut self) -> io::Result<()> {
        let outcome = self.state.outcome();
        let highlight = match &outcome {
            GameOutcome::Win { line, .. } => Some(line),
            _ => None,
        };
        let rendered = render_board(
            self.state.board(),
            &self.config.marks,
            self.config.show_cell_numbers,
            highlight,
        );
        writeln!(self.output, "{}", rendered)
    }

    fn report_outcome(&mut self, outcome: &GameOutcome) -> io::Result<()> {
        let Some(message) = self.config.messages.for_outcome(outcome) else {
            return Ok(());
        };

        match outcome {
            GameOutcome::Win { player, line } => {
                log!("{} won on line {} {:?}", player, line.index, line.cells);
            }
            _ => log!("Game ended in a draw"),
        }

        writeln!(self.output, "{}", message)?;
        writeln!(self.output, "Type 'new' to play again or 'quit' to leave.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tictactoe_common::logger;

    fn run_script(state: TicTacToeGameState, script: &str) -> String {
        logger::init_logger(Some("Test".to_string()));
        let mut output = Vec::new();
        {
            let mut runner =
                GameRunner::with_state(Config::default(), state, Cursor::new(script), &mut output);
            runner.run().unwrap();
        }
        String::from_utf8(output).unwrap()
    }

    fn state(board: &str) -> TicTacToeGameState {
        TicTacToeGameState::from_board(board.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_computer_answers_center_with_corner() {
        let output = run_script(TicTacToeGameState::new(), "4\nquit\n");
        assert!(output.contains("You play 4"), "{}", output);
        assert!(output.contains("Computer plays 0"), "{}", output);
    }

    #[test]
    fn test_invalid_input_is_reported_and_ignored() {
        let output = run_script(TicTacToeGameState::new(), "9\nabc\n\n4\n4\nquit\n");
        assert!(output.contains("Position out of bounds"));
        assert!(output.contains("Unknown command 'abc'"));
        assert!(output.contains("Cell is already marked"));
        assert_eq!(output.matches("Computer plays").count(), 1);
    }

    #[test]
    fn test_human_win_is_reported_with_line() {
        let output = run_script(state("XX.|OO.|..."), "2\n5\n");
        assert!(output.contains("[X]|[X]|[X]"), "{}", output);
        assert!(output.contains("You won!"));
        assert!(output.contains("Game is already over"));
        assert!(!output.contains("Computer plays"));
    }

    #[test]
    fn test_resumed_game_lets_computer_move_first() {
        let output = run_script(state("..X|XO.|.XO"), "");
        assert!(output.contains("Computer plays 0"), "{}", output);
        assert!(output.contains("You lost."));
    }

    #[test]
    fn test_draw_message() {
        let output = run_script(state("XOX|XOO|OX."), "8\nquit\n");
        assert!(output.contains("Draw! But you still lost..."), "{}", output);
    }

    #[test]
    fn test_new_game_after_finish() {
        let output = run_script(state("XX.|OO.|..."), "2\nnew\n4\nquit\n");
        assert!(output.contains("You won!"));
        assert!(output.contains("Computer plays 0"), "{}", output);
    }

    #[test]
    fn test_hint_lists_free_cells() {
        let output = run_script(state("XX.|OO.|..."), "hint\nquit\n");
        assert!(output.contains("cell 2: you win"), "{}", output);
        assert!(output.contains("Best cell: 2"));
    }

    #[test]
    fn test_self_play_ends_in_draw() {
        logger::init_logger(Some("Test".to_string()));
        let mut output = Vec::new();
        let outcome = {
            let mut runner = GameRunner::with_state(
                Config::default(),
                TicTacToeGameState::new(),
                Cursor::new(""),
                &mut output,
            );
            runner.run_self_play().unwrap()
        };
        assert_eq!(outcome, GameOutcome::Draw);

        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches("You play").count(), 5);
        assert_eq!(output.matches("Computer plays").count(), 4);
        assert!(output.contains("Draw! But you still lost..."));
    }
}
