//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `ui`, `mindmap`) so individual
//! components can depend on small focused models. Each is provided once as an
//! `RwSignal` from the root `App`.

pub mod mindmap;
pub mod session;
pub mod ui;
