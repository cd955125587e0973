//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth and mindmap sections while reading/writing
//! shared state from Leptos context providers.

pub mod auth_panel;
pub mod login_form;
pub mod mindmap_node;
pub mod mindmap_panel;
pub mod register_form;
