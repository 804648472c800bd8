//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, auto-play cadence
//! - **[`panes`]** — stateless render functions for each visible pane (bars,
//!   caption, algorithm info, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a validated
//! [`Config`] and call [`App::run`] to start the event loop.
//!
//! [`Config`]: crate::config::Config
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
