use serde::{Deserialize, Serialize};
use tictactoe_common::config::Validate;
use tictactoe_common::tictactoe::{GameOutcome, Player};

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct MessagesConfig {
    pub human_won: String,
    pub computer_won: String,
    pub draw: String,
}

impl MessagesConfig {
    pub fn for_outcome(&self, outcome: &GameOutcome) -> Option<&str> {
        match outcome {
            GameOutcome::InProgress => None,
            GameOutcome::Win { player: Player::Human, .. } => Some(self.human_won.as_str()),
            GameOutcome::Win { player: Player::Computer, .. } => Some(self.computer_won.as_str()),
            GameOutcome::Draw => Some(self.draw.as_str()),
        }
    }
}

impl Validate for MessagesConfig {
    fn validate(&self) -> Result<(), String> {
        for (name, message) in [
            ("human_won", &self.human_won),
            ("computer_won", &self.computer_won),
            ("draw", &self.draw),
        ] {
            if message.trim().is_empty() {
                return Err(format!("messages.{} must not be empty", name));
            }
        }
        Ok(())
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            human_won: "You won!".to_string(),
            computer_won: "You lost.".to_string(),
            draw: "Draw! But you still lost...".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_common::tictactoe::WinningLine;

    #[test]
    fn test_message_per_outcome() {
        let messages = MessagesConfig::default();
        let lost = GameOutcome::Win {
            player: Player::Computer,
            line: WinningLine::new(6),
        };
        assert_eq!(messages.for_outcome(&lost), Some("You lost."));
        assert_eq!(messages.for_outcome(&GameOutcome::Draw), Some("Draw! But you still lost..."));
        assert_eq!(messages.for_outcome(&GameOutcome::InProgress), None);
    }

    #[test]
    fn test_blank_message_rejected() {
        let messages = MessagesConfig {
            draw: "   ".to_string(),
            ..MessagesConfig::default()
        };
        assert_eq!(messages.validate(), Err("messages.draw must not be empty".to_string()));
    }
}
