use super::zoom;
use crate::models::{Geometry, Screen, Workspace};

/// Master region on top, sized by the master ratio; the remaining
/// clients stack horizontally along the bottom strip.
pub fn update(workspace: &mut Workspace, screen: &Screen, bar_bottom: bool) {
    let n = workspace.tilable_count();
    if n <= 1 {
        zoom::update(workspace, screen, bar_bottom);
        return;
    }

    let area = screen.drawable(workspace.bar_height, bar_bottom);
    let master_height = (f64::from(area.h) * f64::from(workspace.master_ratio)) as u32;
    let stack_width = area.w / (n as u32 - 1);

    log::info!("arranging {} clients in hstack layout", n);

    let mut tilable = workspace.clients.iter_mut().filter(|c| !c.is_fft());
    if let Some(master) = tilable.next() {
        master.set_geometry(Geometry::new(area.x, area.y, area.w, master_height));
    }

    let mut x = area.x;
    for client in tilable {
        client.set_geometry(Geometry::new(
            x,
            area.y + master_height as i32,
            stack_width,
            area.h - master_height,
        ));
        x += stack_width as i32;
    }
}
