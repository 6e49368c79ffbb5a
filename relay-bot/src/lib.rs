//! # relay-bot
//!
//! Telegram bot that relays each user's text messages to an OpenAI-compatible completion
//! endpoint and replies with the answer, keeping a short per-user conversation history.
//!
//! Wires relay-core (Bot, Handler, Message), handler-chain, session (history store) and
//! llm-client. Loads config from env and runs the teloxide REPL.

pub mod cli;
pub mod components;
pub mod config;
pub mod handlers;
pub mod messages;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};
pub use components::{build_bot_components, build_handler_chain, create_session_store, BotComponents};
pub use config::{BaseConfig, BotConfig, RelayLimits};
pub use handlers::{parse_command, BotCommand, CommandHandler, RelayError, RelayHandler};
pub use runner::{run_bot, RelayBot};
pub use telegram::{run_repl, TelegramBotAdapter, TelegramMessageWrapper, TelegramUserWrapper};
