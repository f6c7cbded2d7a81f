//! Store types for UI state management
//!
//! `AppState` is the single application-state object handed to every key
//! handler and render function. Each screen keeps its own sub-state here.

pub mod add;
pub mod app;
pub mod list;
pub mod remove;
pub mod search;
pub mod ui;

pub use add::*;
pub use app::*;
pub use list::*;
pub use remove::*;
pub use search::*;
pub use ui::*;
