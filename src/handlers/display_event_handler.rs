use crate::display_event::DisplayEvent;
use crate::display_servers::DisplayServer;
use crate::manager::Manager;

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// Applies one display event to the model.
    /// Returns true if the changes need to be rendered.
    pub fn display_event_handler(&mut self, event: DisplayEvent) -> bool {
        match event {
            DisplayEvent::WindowCreate(client) => self.window_created_handler(client),
            DisplayEvent::WindowDestroy(handle) => self.window_destroyed_handler(handle),
            DisplayEvent::WindowEnter(handle) => self.window_enter_handler(handle),
            DisplayEvent::WindowTakeFocus(handle) => {
                self.focus_window(handle);
                true
            }
            DisplayEvent::MouseCombo(mask, button, handle) => {
                self.mouse_combo_handler(mask, button, handle)
            }
            DisplayEvent::KeyCombo(mask, keysym) => self.key_press_handler(mask, keysym),
            DisplayEvent::ConfigureRequest(change) => self.configure_request_handler(change),
            DisplayEvent::WindowStateChange(handle, action, states) => {
                self.window_state_handler(handle, action, states)
            }
            DisplayEvent::SendCommand(command) => self.command_handler(&command),
        }
    }
}
