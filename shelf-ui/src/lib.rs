//! shelf-ui - application state, key handling and terminal views for shelf
//!
//! Stores hold the state of each screen plus the library itself; components
//! are pure render functions over that state. The binary owns the terminal
//! and the event loop.

pub mod components;
pub mod input;
pub mod stores;

pub use components::render;
pub use input::handle_key;
pub use stores::*;
