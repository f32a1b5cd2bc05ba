//! # RNArtist Selection
//!
//! Compacts a selection made in a drawing into category selectors, the same vocabulary
//! the theme rules of a drawing script are written in.
//!
//! ```rust
//! use rnartist_script::{Category, Scope};
//! use rnartist_selection::{compact, ElementKind, Structure};
//!
//! let mut structure = Structure::new();
//! let first = structure.add(ElementKind::Helix, None, vec![1, 2, 9, 10]);
//! structure.add(ElementKind::Helix, None, vec![12, 13, 20, 21]);
//!
//! let selectors = compact(structure.select(&[first]), &structure);
//! assert_eq!(selectors[0].category, Category::Helix);
//! assert!(!selectors[0].scope.is_everywhere());
//! ```

mod compactor;
mod model;

pub use compactor::{categorize, compact};
pub use model::{
    bond_host, residue_host, DrawingElement, DrawingModel, ElementKind, ElementRecord, ElementRef,
    Structure, StructureError,
};
