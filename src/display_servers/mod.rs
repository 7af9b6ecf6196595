use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_event::DisplayEvent;
use crate::errors::Result;
use crate::models::Screen;
use futures::prelude::*;
use std::pin::Pin;

#[cfg(test)]
mod mock_display_server;
pub mod xlib_display_server;

#[cfg(test)]
pub use self::mock_display_server::MockDisplayServer;
pub use self::xlib_display_server::XlibDisplayServer;

pub trait DisplayServer {
    fn new(config: &Config) -> Result<Self>
    where
        Self: Sized;

    /// The dimensions of the screen being managed.
    fn screen(&self) -> Screen;

    /// Drains every event the server has pending.
    fn get_next_events(&mut self) -> Vec<DisplayEvent>;

    fn execute_action(&mut self, act: DisplayAction);

    /// Resolves when the server connection has something to read.
    fn wait_readable(&self) -> Pin<Box<dyn Future<Output = ()>>>;

    fn flush(&self);

    /// False once the connection has hit an unrecoverable error.
    fn connection_ok(&self) -> bool {
        true
    }

    /// Releases grabs and asks the remaining windows to close.
    fn cleanup(&mut self) {}
}
