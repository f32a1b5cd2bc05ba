//! # RNArtist Script
//!
//! Document model for drawing scripts of RNA secondary structures.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ node: leaves, blocks, text rendering        │
//! │ history: blocks with an undo/redo cursor    │
//! │ location: residue ranges                    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ sections: ss, theme, layout, png, svg       │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ document: rnartist { ... } → text           │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The model only writes scripts. Reading them back is left to the drawing engine.

pub mod category;
pub mod color;
pub mod document;
pub mod error;
pub mod history;
pub mod location;
pub mod node;
pub mod sections;

pub use category::{Category, Host, JunctionTopology};
pub use color::{HexColor, Rgb};
pub use document::RnArtist;
pub use error::{ScriptError, ScriptResult};
pub use history::HistoryContainer;
pub use location::{Block, Location};
pub use node::{Container, Node, Property, ValueKind};
pub use sections::{
    ColorRule, DetailsRule, JunctionRule, Layout, LineRule, OutputFormat, OutputTarget, Scope,
    Selector, SequenceSource, Theme, Visibility, VisibilityRule,
};
