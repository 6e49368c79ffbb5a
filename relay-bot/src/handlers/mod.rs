//! Handlers run by the chain: commands first, then the relay.

mod command;
mod relay;

pub use command::{parse_command, BotCommand, CommandHandler};
pub use relay::{RelayError, RelayHandler};
