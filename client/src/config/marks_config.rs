use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::tictactoe::{Mark, Player};

const RESERVED_GLYPHS: [char; 7] = ['.', '-', '_', '[', ']', '|', '+'];

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MarksConfig {
    pub human: String,
    pub computer: String,
}

impl MarksConfig {
    pub fn glyph(&self, mark: Mark) -> Option<&str> {
        match mark.player()? {
            Player::Human => Some(self.human.as_str()),
            Player::Computer => Some(self.computer.as_str()),
        }
    }
}

fn validate_glyph(name: &str, glyph: &str) -> Result<(), String> {
    let mut chars = glyph.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return Err(format!("{} mark must be exactly one character, got '{}'", name, glyph));
    };
    if c.is_whitespace() || c.is_ascii_digit() || RESERVED_GLYPHS.contains(&c) {
        return Err(format!("{} mark '{}' is not allowed", name, c));
    }
    Ok(())
}

impl Validate for MarksConfig {
    fn validate(&self) -> Result<(), String> {
        validate_glyph("human", &self.human)?;
        validate_glyph("computer", &self.computer)?;
        if self.human == self.computer {
            return Err("human and computer marks must differ".to_string());
        }
        Ok(())
    }
}

impl Default for MarksConfig {
    fn default() -> Self {
        Self {
            human: "X".to_string(),
            computer: "O".to_string(),
        }
    }
}
