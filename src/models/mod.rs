mod client;
mod delete_register;
mod geometry;
mod mode;
mod press_state;
mod replay;
mod screen;
mod workspace;

pub use client::{Client, WindowHandle, WindowType};
pub use delete_register::DeleteRegister;
pub use geometry::Geometry;
pub use mode::Mode;
pub use press_state::{Motion, Operator, PressState};
pub use replay::Replay;
pub use screen::Screen;
pub use workspace::Workspace;
