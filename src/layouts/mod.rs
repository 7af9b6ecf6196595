use crate::models::{Screen, Workspace};
use serde::{Deserialize, Serialize};

mod grid;
mod horizontal_stack;
mod vertical_stack;
mod zoom;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Zoom,
    Grid,
    HStack,
    VStack,
}

pub const LAYOUTS: &[Layout] = &[Layout::Zoom, Layout::Grid, Layout::HStack, Layout::VStack];

impl Default for Layout {
    fn default() -> Self {
        Layout::VStack
    }
}

impl Layout {
    #[must_use]
    pub fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Layout::Zoom),
            1 => Some(Layout::Grid),
            2 => Some(Layout::HStack),
            3 => Some(Layout::VStack),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_index(self) -> u32 {
        match self {
            Layout::Zoom => 0,
            Layout::Grid => 1,
            Layout::HStack => 2,
            Layout::VStack => 3,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::from_index(((self.as_index() + 1) % LAYOUTS.len() as u32) as i32)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self.as_index() {
            0 => Layout::VStack,
            i => Self::from_index(i as i32 - 1).unwrap_or_default(),
        }
    }
}

/// Recomputes the rectangle of every tilable client on the workspace.
///
/// A workspace holding a single client always falls back to zoom, as do
/// the other layouts when at most one client is tilable. Floating,
/// fullscreen and transient clients are left untouched.
pub fn arrange(workspace: &mut Workspace, screen: &Screen, bar_bottom: bool) {
    if workspace.is_empty() {
        return;
    }
    log::debug!("arranging windows");
    let layout = if workspace.len() > 1 {
        workspace.layout
    } else {
        Layout::Zoom
    };
    match layout {
        Layout::Zoom => zoom::update(workspace, screen, bar_bottom),
        Layout::Grid => grid::update(workspace, screen, bar_bottom),
        Layout::HStack => horizontal_stack::update(workspace, screen, bar_bottom),
        Layout::VStack => vertical_stack::update(workspace, screen, bar_bottom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Client, Geometry, WindowHandle::MockHandle};

    fn workspace(layout: Layout, bar_height: u32, master_ratio: f32, n: u32) -> Workspace {
        let mut ws = Workspace::new(layout, 0, master_ratio, bar_height);
        for i in 1..=n {
            ws.append(Client::new(MockHandle(i)));
        }
        ws
    }

    fn geometries(ws: &Workspace) -> Vec<Geometry> {
        ws.clients.iter().map(Client::geometry).collect()
    }

    #[test]
    fn single_client_fills_the_drawable_area() {
        let screen = Screen::new(1920, 1080);
        let mut ws = workspace(Layout::Zoom, 20, 0.5, 1);
        arrange(&mut ws, &screen, false);
        assert_eq!(geometries(&ws), [Geometry::new(0, 20, 1920, 1060)]);
    }

    #[test]
    fn vstack_splits_master_and_stack_by_ratio() {
        let screen = Screen::new(1920, 1080);
        let mut ws = workspace(Layout::VStack, 20, 0.5, 3);
        arrange(&mut ws, &screen, false);
        assert_eq!(
            geometries(&ws),
            [
                Geometry::new(0, 20, 960, 1060),
                Geometry::new(960, 20, 960, 530),
                Geometry::new(960, 550, 960, 530),
            ]
        );
    }

    #[test]
    fn hstack_is_vstack_transposed() {
        let screen = Screen::new(1000, 820);
        let mut ws = workspace(Layout::HStack, 20, 0.5, 3);
        arrange(&mut ws, &screen, false);
        assert_eq!(
            geometries(&ws),
            [
                Geometry::new(0, 20, 1000, 400),
                Geometry::new(0, 420, 500, 400),
                Geometry::new(500, 420, 500, 400),
            ]
        );
    }

    #[test]
    fn stack_layouts_with_one_tilable_client_fall_back_to_zoom() {
        let screen = Screen::new(1920, 1080);
        let mut ws = workspace(Layout::VStack, 0, 0.5, 3);
        ws.clients[0].is_floating = true;
        ws.clients[2].is_floating = true;
        arrange(&mut ws, &screen, false);
        assert_eq!(ws.clients[1].geometry(), Geometry::new(0, 0, 1920, 1080));
    }

    #[test]
    fn layouts_skip_floating_fullscreen_and_transient_clients() {
        let screen = Screen::new(1920, 1080);
        let mut ws = workspace(Layout::VStack, 0, 0.5, 4);
        ws.clients[1].is_floating = true;
        ws.clients[1].set_geometry(Geometry::new(5, 5, 50, 50));
        ws.clients[3].is_transient = true;
        ws.clients[3].set_geometry(Geometry::new(7, 7, 70, 70));
        arrange(&mut ws, &screen, false);
        assert_eq!(ws.clients[1].geometry(), Geometry::new(5, 5, 50, 50));
        assert_eq!(ws.clients[3].geometry(), Geometry::new(7, 7, 70, 70));
        // The two tilable clients split the screen.
        assert_eq!(ws.clients[0].geometry(), Geometry::new(0, 0, 960, 1080));
        assert_eq!(ws.clients[2].geometry(), Geometry::new(960, 0, 960, 1080));
    }

    #[test]
    fn grid_tiles_the_drawable_area_within_integer_division_losses() {
        let screen = Screen::new(1920, 1080);
        for n in 2..=9 {
            let mut ws = workspace(Layout::Grid, 20, 0.5, n);
            arrange(&mut ws, &screen, false);
            let area: u64 = ws
                .clients
                .iter()
                .map(|c| u64::from(c.w) * u64::from(c.h))
                .sum();
            let drawable = u64::from(screen.width) * u64::from(screen.height - 20);
            assert!(area <= drawable, "grid overflows the screen for n={n}");
            // Integer division may lose at most a pixel strip per row and
            // column of the grid.
            let slack = u64::from(screen.width + screen.height) * 4;
            assert!(
                drawable - area <= slack,
                "grid leaves too much uncovered for n={n}: {area} of {drawable}"
            );
        }
    }

    #[test]
    fn grid_of_three_carries_the_remainder_in_the_last_column() {
        let screen = Screen::new(1920, 1080);
        let mut ws = workspace(Layout::Grid, 0, 0.5, 3);
        arrange(&mut ws, &screen, false);
        // cols = 2, rows = 1; the second column must hold two clients.
        assert_eq!(
            geometries(&ws),
            [
                Geometry::new(0, 0, 960, 1080),
                Geometry::new(960, 0, 960, 540),
                Geometry::new(960, 540, 960, 540),
            ]
        );
    }
}
