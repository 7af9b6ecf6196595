use crate::config::Config;
use crate::display_action::DisplayAction;
use crate::display_servers::DisplayServer;
use crate::errors::Result;
use crate::state::State;
use crate::utils::child_process::Children;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Maintains current program state and glues it to the display server.
pub struct Manager<SERVER> {
    pub state: State,
    pub config: Config,
    pub display_server: SERVER,
    pub(crate) children: Children,
    pub(crate) reap_requested: Arc<AtomicBool>,
}

impl<SERVER: DisplayServer> Manager<SERVER> {
    pub fn new(config: Config) -> Result<Self> {
        let display_server = SERVER::new(&config)?;
        let mut state = State::new(&config);
        state.screen = display_server.screen();
        Ok(Self {
            state,
            config,
            display_server,
            children: Children::default(),
            reap_requested: Arc::default(),
        })
    }

    pub fn register_child_hook(&self) {
        crate::utils::child_process::register_child_hook(self.reap_requested.clone());
    }

    /// The draw pass: recomputes the layout and configures every client
    /// of the current workspace with its display rectangle and border.
    pub fn update_windows(&mut self) {
        self.state.arrange();
        let ws = self.state.current_ws();
        let actions: Vec<DisplayAction> = ws
            .clients
            .iter()
            .map(|c| {
                let (geom, border) =
                    c.display_geometry(ws.layout, self.config.zoom_gap, self.config.border_px);
                DisplayAction::MoveResizeWindow(c.handle, geom, border)
            })
            .collect();
        self.state.actions.extend(actions);
    }
}

#[cfg(test)]
impl Manager<crate::display_servers::MockDisplayServer> {
    pub fn new_test() -> Self {
        Self::new_test_with_config(Config::default())
    }

    pub fn new_test_with_config(config: Config) -> Self {
        let mut manager = Self::new(config).expect("mock display server cannot fail");
        manager.state.screen = crate::models::Screen::new(1920, 1080);
        manager
    }

    /// Appends a bare client to a workspace, focusing it, the way a
    /// map request would.
    pub fn add_client(&mut self, ws: usize, id: u32) -> crate::models::WindowHandle {
        let handle = crate::models::WindowHandle::MockHandle(id);
        self.state.ws_mut(ws).append(crate::models::Client::new(handle));
        self.state.ws_mut(ws).current = Some(handle);
        handle
    }
}
