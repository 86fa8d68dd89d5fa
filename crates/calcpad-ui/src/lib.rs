//! Declarative view tree for the Calcpad screen.
//!
//! [`ContentView::build`] produces a [`Node`] tree: a header with a menu
//! button, a two-line display, and a 5x4 pad of circular buttons. Taps go
//! to [`tap::handle_tap`], which only logs a placeholder.

pub mod content;
pub mod node;
pub mod pad;
pub mod render;
pub mod tap;

pub use content::{ContentView, UiMetrics};
pub use node::{Alignment, Font, FontWeight, Frame, Node, Style};
pub use pad::NUMBER_PAD;
pub use render::render_outline;
pub use tap::{handle_tap, TapAction};
