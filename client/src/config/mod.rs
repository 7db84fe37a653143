mod config;
mod marks_config;
mod messages_config;

pub use config::{Config, config_manager_for, get_config_manager};
pub use marks_config::MarksConfig;
pub use messages_config::MessagesConfig;
