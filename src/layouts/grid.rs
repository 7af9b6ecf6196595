use super::zoom;
use crate::models::{Geometry, Screen, Workspace};

/// Arranges the tilable clients in a grid, column-major.
///
/// The column count is the smallest `cols` with `cols * cols >= n`. When
/// the trailing columns cannot hold every client with `n / cols` rows,
/// they carry one extra row; integer division losses land in the last
/// row of each column.
pub fn update(workspace: &mut Workspace, screen: &Screen, bar_bottom: bool) {
    let n = workspace.tilable_count();
    if n <= 1 {
        zoom::update(workspace, screen, bar_bottom);
        return;
    }

    let area = screen.drawable(workspace.bar_height, bar_bottom);
    let mut cols = 0;
    while cols * cols < n {
        cols += 1;
    }
    let mut rows = n / cols;
    let col_w = area.w / cols as u32;

    log::info!("arranging {} clients in grid layout", n);

    let mut col_cnt = 0;
    let mut row_cnt = 0;
    for (i, client) in workspace
        .clients
        .iter_mut()
        .filter(|c| !c.is_fft())
        .enumerate()
    {
        if cols - (n % cols) < (i / rows) + 1 {
            rows = n / cols + 1;
        }
        client.set_geometry(Geometry::new(
            col_cnt * col_w as i32,
            area.y + (row_cnt * area.h / rows as u32) as i32,
            col_w,
            area.h / rows as u32,
        ));
        row_cnt += 1;
        if row_cnt as usize >= rows {
            row_cnt = 0;
            col_cnt += 1;
        }
    }
}
