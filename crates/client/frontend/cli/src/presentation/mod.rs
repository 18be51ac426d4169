//! Terminal presentation: layout, widgets, theming, and the event loop.

pub mod event_loop;
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;

pub use event_loop::EventLoop;
pub use terminal::{Tui, TerminalGuard};
pub use theme::DashTheme;
