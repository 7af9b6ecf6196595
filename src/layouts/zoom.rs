use crate::models::{Screen, Workspace};

/// Every tilable client gets the whole drawable area. The draw pass
/// decides per client which of them is actually visible on top.
pub fn update(workspace: &mut Workspace, screen: &Screen, bar_bottom: bool) {
    let area = screen.drawable(workspace.bar_height, bar_bottom);
    for client in workspace.clients.iter_mut().filter(|c| !c.is_fft()) {
        client.set_geometry(area);
    }
}
