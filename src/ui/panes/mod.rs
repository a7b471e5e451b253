//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: The expression line with token colouring, current step and result
//! - [`tree`]: Syntax tree with reduced values and the current node highlighted
//! - [`tokens`]: Token stream with kinds and columns
//! - [`status`]: Status bar with keybindings and stepping state
//!
//! Each pane module exports a primary `render_*` function plus any state or
//! render-data types it needs.

pub mod source;
pub mod status;
pub mod tokens;
pub mod tree;

// Re-export render functions for convenience
pub use source::{render_source_pane, SourceRenderData};
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::{render_tree_pane, TreeRenderData, TreeScrollState};
