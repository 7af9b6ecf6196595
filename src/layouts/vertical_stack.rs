use super::zoom;
use crate::models::{Geometry, Screen, Workspace};

/// Master region on the left, sized by the master ratio; the remaining
/// clients stack vertically in the right strip.
pub fn update(workspace: &mut Workspace, screen: &Screen, bar_bottom: bool) {
    let n = workspace.tilable_count();
    if n <= 1 {
        zoom::update(workspace, screen, bar_bottom);
        return;
    }

    let area = screen.drawable(workspace.bar_height, bar_bottom);
    let master_width = (f64::from(area.w) * f64::from(workspace.master_ratio)) as u32;
    let stack_height = area.h / (n as u32 - 1);

    log::info!("arranging {} clients in vstack layout", n);

    let mut tilable = workspace.clients.iter_mut().filter(|c| !c.is_fft());
    if let Some(master) = tilable.next() {
        master.set_geometry(Geometry::new(area.x, area.y, master_width, area.h));
    }

    let mut y = area.y;
    for client in tilable {
        client.set_geometry(Geometry::new(
            master_width as i32,
            y,
            area.w - master_width,
            stack_height,
        ));
        y += stack_height as i32;
    }
}
