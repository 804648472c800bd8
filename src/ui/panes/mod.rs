//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: Bar chart of the current snapshot with a color legend
//! - [`caption`]: Description of the current step
//! - [`info`]: Complexity and use cases of the selected algorithm
//! - [`status`]: Status bar with keybindings and playback state
//!
//! Each pane exports one stateless `render_*` function.

pub mod bars;
pub mod caption;
pub mod info;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use caption::render_caption_pane;
pub use info::render_info_pane;
pub use status::{render_status_bar, StatusRenderData};
