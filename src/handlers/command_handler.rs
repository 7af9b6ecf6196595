use crate::command::{Command, TeleportLocation};
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::layouts::Layout;
use crate::manager::Manager;
use crate::models::{Mode, Replay};
use crate::utils::child_process;

impl<SERVER: DisplayServer> Manager<SERVER> {
    /// Processes a command and invokes the associated function.
    /// Returns true if the changes need to be rendered.
    pub fn command_handler(&mut self, command: &Command) -> bool {
        log::debug!("running command {:?}", command);
        match command {
            Command::ResizeMaster(delta) => self.resize_master(*delta),
            Command::ChangeLayout(index) => self.change_layout(*index),
            Command::NextLayout => {
                let next = self.state.current_ws().layout.next();
                self.change_layout(next.as_index() as i32)
            }
            Command::PreviousLayout => {
                let previous = self.state.current_ws().layout.previous();
                self.change_layout(previous.as_index() as i32)
            }
            Command::LastLayout => {
                let last = self.state.prev_layout;
                self.change_layout(last.as_index() as i32)
            }
            Command::ChangeMode(index) => self.change_mode(*index),
            Command::ToggleFloat => self.toggle_float(),
            Command::ToggleFullscreen => self.toggle_fullscreen(),
            Command::ToggleBar => self.toggle_bar(),
            Command::Quit(code) => {
                log::warn!("quitting");
                self.state.exit_code = *code;
                self.state.running = false;
                false
            }
            Command::Replay => self.replay(),
            Command::Paste => self.paste(),
            Command::SendToScratchpad => self.send_to_scratchpad(),
            Command::GetFromScratchpad => self.get_from_scratchpad(),
            Command::ResizeFloatWidth(delta) => self.resize_float(*delta, 0),
            Command::ResizeFloatHeight(delta) => self.resize_float(0, *delta),
            Command::MoveFloatX(delta) => self.move_float(*delta, 0),
            Command::MoveFloatY(delta) => self.move_float(0, *delta),
            Command::TeleportClient(location) => self.teleport_client(*location),
            Command::FocusUrgent => self.focus_urgent(),
            Command::FocusNextClient => self.focus_next_client(),
            Command::FocusPrevClient => self.focus_prev_client(),
            Command::MoveCurrentUp => self.move_current(true),
            Command::MoveCurrentDown => self.move_current(false),
            Command::FocusLastWs => self.focus_last_ws(),
            Command::FocusNextWs => self.focus_next_ws(),
            Command::FocusPrevWs => self.focus_prev_ws(),
            Command::MakeMaster => self.make_master(),
            Command::ChangeWs(ws) => self.change_ws(*ws),
            Command::CurrentToWs(ws) => self.current_to_ws(*ws),
            Command::Spawn(argv) => {
                child_process::spawn(argv, &mut self.children);
                false
            }
            Command::RunOperator { op, motion, count } => {
                self.run_operator(*op, *motion, *count)
            }
        }
    }

    /// Re-executes the last command or operator triple.
    pub fn replay(&mut self) -> bool {
        match self.state.replay.clone() {
            Some(Replay::Command(command)) => self.command_handler(&command),
            Some(Replay::Triple { op, motion, count }) => self.run_operator(op, motion, count),
            None => false,
        }
    }

    fn change_layout(&mut self, index: i32) -> bool {
        let Some(layout) = Layout::from_index(index) else {
            return false;
        };
        if layout == self.state.current_ws().layout {
            return false;
        }
        self.state.prev_layout = self.state.current_ws().layout;
        self.state.current_ws_mut().layout = layout;
        log::info!(
            "changed layout from {:?} to {:?}",
            self.state.prev_layout,
            layout
        );
        let current = self.state.current_ws().current;
        self.state.update_focused_client(current);
        true
    }

    fn change_mode(&mut self, index: i32) -> bool {
        let Some(mode) = Mode::from_index(index) else {
            return false;
        };
        if mode == self.state.mode {
            return false;
        }
        self.state.mode = mode;
        log::info!("changing to mode {:?}", mode);
        true
    }

    /// Grows or shrinks the master region by `delta` percent of the
    /// screen. Values that would collapse either region are ignored.
    fn resize_master(&mut self, delta: i32) -> bool {
        let layout = self.state.current_ws().layout;
        if layout != Layout::HStack && layout != Layout::VStack {
            return false;
        }
        let change = delta as f32 / 100.0;
        let ratio = self.state.current_ws().master_ratio;
        if ratio + change >= 1.0 || ratio + change <= 0.1 {
            return false;
        }
        log::info!("resizing master ratio from {:.2} to {:.2}", ratio, ratio + change);
        self.state.current_ws_mut().master_ratio = ratio + change;
        true
    }

    /// Toggles the reserved bar strip and republishes the workarea.
    fn toggle_bar(&mut self) -> bool {
        let bar_height = self.state.current_ws().bar_height;
        if bar_height == 0 && self.config.bar_height > 0 {
            self.state.current_ws_mut().bar_height = self.config.bar_height;
            log::info!("toggled bar to shown");
        } else if bar_height == self.config.bar_height && bar_height != 0 {
            self.state.current_ws_mut().bar_height = 0;
            log::info!("toggled bar to hidden");
        } else {
            return false;
        }
        let workarea = self.state.workarea();
        self.state
            .actions
            .push_back(DisplayAction::SetWorkarea(workarea));
        true
    }

    fn toggle_float(&mut self) -> bool {
        let Some(current) = self.state.current_ws().current else {
            return false;
        };
        log::info!("toggling floating state of client {:?}", current);
        let bar = self.state.current_ws().bar_height;
        let screen = self.state.screen;
        let center = self.config.center_floating;
        let Some(client) = self.state.current_ws_mut().client_mut(current) else {
            return false;
        };
        client.is_floating = !client.is_floating;
        if client.is_floating && center {
            client.x = (i64::from(screen.width) / 2 - i64::from(client.w) / 2) as i32;
            client.y =
                ((i64::from(screen.height) - i64::from(bar) - i64::from(client.h)) / 2).max(0)
                    as i32;
        }
        true
    }

    fn toggle_fullscreen(&mut self) -> bool {
        let Some(current) = self.state.current_ws().current else {
            return false;
        };
        let fullscreen = self
            .state
            .current_ws()
            .client(current)
            .map_or(false, |c| c.is_fullscreen);
        self.state.set_fullscreen(current, !fullscreen);
        true
    }

    /// Resizes the focused float by a pixel delta. Sizes cannot reach
    /// zero.
    fn resize_float(&mut self, dw: i32, dh: i32) -> bool {
        let Some(current) = self.state.current_ws().current else {
            return false;
        };
        let Some(client) = self.state.current_ws_mut().client_mut(current) else {
            return false;
        };
        if !client.is_floating {
            return false;
        }
        if client.w as i32 + dw <= 0 || client.h as i32 + dh <= 0 {
            return false;
        }
        client.w = (client.w as i32 + dw) as u32;
        client.h = (client.h as i32 + dh) as u32;
        true
    }

    fn move_float(&mut self, dx: i32, dy: i32) -> bool {
        let Some(current) = self.state.current_ws().current else {
            return false;
        };
        let Some(client) = self.state.current_ws_mut().client_mut(current) else {
            return false;
        };
        if !client.is_floating {
            return false;
        }
        client.x += dx;
        client.y += dy;
        true
    }

    /// Snaps the focused float to one of seven screen anchors.
    fn teleport_client(&mut self, location: i32) -> bool {
        let Some(location) = TeleportLocation::from_index(location) else {
            return false;
        };
        let Some(current) = self.state.current_ws().current else {
            return false;
        };
        let screen = self.state.screen;
        let bar_bottom = self.state.bar_bottom;
        let border = self.config.border_px;
        let bar = self.state.current_ws().bar_height;
        let Some(client) = self.state.current_ws_mut().client_mut(current) else {
            return false;
        };
        if !client.is_floating || client.is_transient {
            return false;
        }
        let gap = client.gap as i32;
        let (w, h) = (client.w as i32, client.h as i32);
        let (sw, sh) = (screen.width as i32, screen.height as i32);
        let bh = bar as i32;
        let top = (if bar_bottom { 0 } else { bh }) + gap;
        let screen_bottom = if bar_bottom { sh - bh } else { sh };
        let bottom = screen_bottom - h - gap - 2 * border as i32;
        match location {
            TeleportLocation::TopLeft => {
                client.x = gap;
                client.y = top;
            }
            TeleportLocation::TopCenter => {
                client.x = (sw - w) / 2;
                client.y = top;
            }
            TeleportLocation::TopRight => {
                client.x = sw - w - gap - 2 * border as i32;
                client.y = top;
            }
            TeleportLocation::Center => {
                client.x = (sw - w) / 2;
                client.y = (sh - bh - h) / 2;
            }
            TeleportLocation::BottomLeft => {
                client.x = gap;
                client.y = bottom;
            }
            TeleportLocation::BottomCenter => {
                client.x = (sw - w) / 2;
                client.y = bottom;
            }
            TeleportLocation::BottomRight => {
                client.x = sw - w - gap - 2 * border as i32;
                client.y = bottom;
            }
        }
        true
    }

    fn move_current(&mut self, up: bool) -> bool {
        let Some(current) = self.state.current_ws().current else {
            return false;
        };
        if up {
            self.state.current_ws_mut().move_up(current);
        } else {
            self.state.current_ws_mut().move_down(current);
        }
        true
    }

    /// Walks the focused client to the head of a stack layout.
    fn make_master(&mut self) -> bool {
        let ws = self.state.current_ws();
        let Some(current) = ws.current else {
            return false;
        };
        if ws.len() < 2
            || ws.head() == Some(current)
            || !matches!(ws.layout, Layout::HStack | Layout::VStack)
        {
            return false;
        }
        while self.state.current_ws().head() != Some(current) {
            self.state.current_ws_mut().move_up(current);
        }
        self.state.update_focused_client(Some(current));
        true
    }
}
