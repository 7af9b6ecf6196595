//! The core of howm: a modal, tiling window manager for X.
//!
//! Commands are composed the way a modal text editor composes them, as
//! operator, count, motion triples, next to plain one-key bindings and a
//! control socket for scripting.
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::must_use_candidate,
    clippy::default_trait_access,
    clippy::module_name_repetitions
)]
mod command;
pub mod config;
mod display_action;
mod display_event;
pub mod display_servers;
pub mod errors;
mod event_loop;
mod handlers;
pub mod layouts;
pub mod logging;
mod manager;
pub mod models;
pub mod state;
pub mod utils;

pub use command::Command;
pub use config::Config;
pub use display_action::{BorderRole, DisplayAction};
pub use display_event::DisplayEvent;
pub use display_servers::{DisplayServer, XlibDisplayServer};
pub use manager::Manager;
pub use state::State;
pub use utils::command_socket::{socket_name, CommandSocket, IpcStatus};
