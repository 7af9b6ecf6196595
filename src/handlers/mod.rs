pub mod command_handler;
pub mod display_event_handler;
mod key_press_handler;
mod operator_handler;
mod scratchpad_handler;
mod window_handler;
mod workspace_handler;
