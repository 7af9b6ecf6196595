use super::{Config, DisplayServer, Result, Screen};
use crate::display_action::DisplayAction;
use crate::display_event::DisplayEvent;

/// Stands in for the X server so handlers can run under test.
#[derive(Default)]
pub struct MockDisplayServer {
    pub executed: Vec<DisplayAction>,
}

impl DisplayServer for MockDisplayServer {
    fn new(_: &Config) -> Result<Self> {
        Ok(Self::default())
    }

    fn screen(&self) -> Screen {
        Screen::new(1920, 1080)
    }

    fn get_next_events(&mut self) -> Vec<DisplayEvent> {
        vec![]
    }

    fn execute_action(&mut self, act: DisplayAction) {
        self.executed.push(act);
    }

    fn wait_readable(&self) -> std::pin::Pin<Box<dyn std::future::Future<Output = ()>>> {
        unimplemented!()
    }

    fn flush(&self) {}
}
