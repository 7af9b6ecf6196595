use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::manager::Manager;

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// Detaches the focused client into the scratchpad slot.
    /// Refused while the slot is occupied.
    pub fn send_to_scratchpad(&mut self) -> bool {
        if self.state.scratchpad.is_some() {
            return false;
        }
        let Some(current) = self.state.current_ws().current else {
            return false;
        };
        log::info!("sending client {:?} to the scratchpad", current);
        let Some(client) = self.state.detach_client(current) else {
            return false;
        };
        self.state
            .actions
            .push_back(DisplayAction::UnmapWindow(current));
        let focus = self.state.current_ws().current;
        self.state.update_focused_client(focus);
        self.state.scratchpad = Some(client);
        true
    }

    /// Attaches the scratchpad client to the tail of the current
    /// workspace as a float at the centre of the screen.
    pub fn get_from_scratchpad(&mut self) -> bool {
        let Some(mut client) = self.state.scratchpad.take() else {
            return false;
        };
        let handle = client.handle;
        log::info!("getting client {:?} from the scratchpad", handle);
        client.is_floating = true;
        client.w = self.config.scratchpad_width;
        client.h = self.config.scratchpad_height;
        let bar = self.state.current_ws().bar_height;
        client.x =
            (i64::from(self.state.screen.width) / 2 - i64::from(client.w) / 2) as i32;
        client.y = ((i64::from(self.state.screen.height) - i64::from(bar) - i64::from(client.h))
            / 2)
        .max(0) as i32;
        self.state.current_ws_mut().append(client);
        self.state.actions.push_back(DisplayAction::MapWindow(handle));
        self.state.update_focused_client(Some(handle));
        true
    }
}
