use tictactoe_common::tictactoe::{BOARD_SIDE, Board, CELL_COUNT, WinningLine};

use crate::config::MarksConfig;

pub const HELP_TEXT: &str = "\
Commands:
  0-8        place your mark on that cell (0 is top-left, 8 is bottom-right)
  hint       show the value of every free cell
  new        start a new game
  help       show this message
  quit       leave the game";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    Hint,
    NewGame,
    Help,
    Quit,
}

/// Blank lines yield `Ok(None)`.
pub fn parse_command(input: &str) -> Result<Option<Command>, String> {
    let input = input.trim().to_ascii_lowercase();
    if input.is_empty() {
        return Ok(None);
    }

    let command = match input.as_str() {
        "hint" | "h" => Command::Hint,
        "new" | "n" | "restart" => Command::NewGame,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => match other.parse::<usize>() {
            Ok(cell) => Command::Play(cell),
            Err(_) => {
                return Err(format!(
                    "Unknown command '{}'. Type 'help' for the list of commands",
                    other
                ));
            }
        },
    };
    Ok(Some(command))
}

pub fn render_board(
    board: &Board,
    marks: &MarksConfig,
    show_cell_numbers: bool,
    highlight: Option<&WinningLine>,
) -> String {
    let slots: Vec<String> = (0..CELL_COUNT)
        .map(|cell| {
            let glyph = match board.get(cell).and_then(|mark| marks.glyph(mark)) {
                Some(glyph) => glyph.to_string(),
                None if show_cell_numbers => cell.to_string(),
                None => " ".to_string(),
            };
            if highlight.is_some_and(|line| line.contains(cell)) {
                format!("[{}]", glyph)
            } else {
                format!(" {} ", glyph)
            }
        })
        .collect();

    slots
        .chunks(BOARD_SIDE)
        .map(|row| row.join("|"))
        .collect::<Vec<_>>()
        .join("\n---+---+---\n")
}
