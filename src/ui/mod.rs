//! Terminal plan builder
//!
//! A thin ratatui front-end over [`Session`](crate::session::Session):
//! key presses become actions, and the screen is redrawn from session state.

pub mod app;

pub use app::{BuilderApp, RowKind};
