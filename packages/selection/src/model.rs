//! # Drawing Model
//!
//! What the compactor needs to know about a drawn structure: the kind of each
//! element, the element it belongs to, the residues it covers, and how many elements of
//! each category the whole drawing holds.
//!
//! [`Structure`] is a plain in-memory model. Elements live in one vector and refer to
//! their parent by index.

use rnartist_script::{Category, Host, JunctionTopology};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kind of a drawn element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementKind {
    Helix,
    Junction { topology: JunctionTopology },
    SingleStrand,
    /// Backbone link between two consecutive residues
    PhosphodiesterBond,
    /// Base-pair line
    SecondaryInteraction,
    /// Glyph drawn on a base pair
    InteractionSymbol,
    Residue,
    /// Letter drawn on a residue
    ResidueLetter,
    TertiaryInteraction,
    Pknot,
}

/// One element of a drawing
pub trait DrawingElement {
    /// Identity within the drawing; the same element always gives the same id
    fn id(&self) -> usize;

    fn kind(&self) -> ElementKind;

    fn parent(&self) -> Option<Self>
    where
        Self: Sized;

    /// Residue positions covered by this element
    fn positions(&self) -> &[u32];
}

/// Authoritative element counts for a whole drawing
pub trait DrawingModel {
    fn helix_count(&self) -> usize;

    /// Junctions of the given shape, or all of them
    fn junction_count(&self, topology: Option<JunctionTopology>) -> usize;

    fn single_strand_count(&self) -> usize;

    /// Bonds inside the given host, or all of them
    fn phosphodiester_count(&self, host: Option<Host>) -> usize;

    fn secondary_interaction_count(&self) -> usize;

    fn interaction_symbol_count(&self) -> usize;

    /// Residues inside the given host, or all of them
    fn residue_count(&self, host: Option<Host>) -> usize;

    /// Count matching a category, qualifier included
    fn total(&self, category: Category) -> usize {
        match category {
            Category::Helix => self.helix_count(),
            Category::Junction(topology) => self.junction_count(Some(topology)),
            Category::SingleStrand => self.single_strand_count(),
            Category::PhosphodiesterBond(host) => self.phosphodiester_count(host),
            Category::SecondaryInteraction => self.secondary_interaction_count(),
            Category::InteractionSymbol => self.interaction_symbol_count(),
            Category::Residue(host) => self.residue_count(host),
            // every residue carries one letter
            Category::ResidueLetter => self.residue_count(None),
        }
    }
}

/// Host a residue belongs to, judged from its parent
pub fn residue_host(parent: Option<ElementKind>) -> Option<Host> {
    match parent? {
        ElementKind::Helix | ElementKind::SecondaryInteraction => Some(Host::Helix),
        ElementKind::Junction { topology } => Some(Host::Junction(topology)),
        ElementKind::SingleStrand => Some(Host::SingleStrand),
        _ => None,
    }
}

/// Host a backbone bond belongs to, judged from its parent
pub fn bond_host(parent: Option<ElementKind>) -> Option<Host> {
    match parent? {
        ElementKind::Helix => Some(Host::Helix),
        ElementKind::Junction { topology } => Some(Host::Junction(topology)),
        ElementKind::SingleStrand => Some(Host::SingleStrand),
        _ => None,
    }
}

#[derive(Error, Debug)]
pub enum StructureError {
    #[error("Invalid structure JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Element {element} has parent {parent}, which is not an earlier element")]
    DanglingParent { element: usize, parent: usize },
}

/// Serialized form of one element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementRecord {
    #[serde(flatten)]
    pub kind: ElementKind,
    #[serde(default)]
    pub parent: Option<usize>,
    #[serde(default)]
    pub positions: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    elements: Vec<ElementRecord>,
}

impl Structure {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from `{"elements": [...]}`; parents must come before their children
    pub fn from_json(json: &str) -> Result<Self, StructureError> {
        let structure: Structure = serde_json::from_str(json)?;
        structure.validate()?;
        Ok(structure)
    }

    fn validate(&self) -> Result<(), StructureError> {
        for (element, record) in self.elements.iter().enumerate() {
            if let Some(parent) = record.parent {
                if parent >= element {
                    return Err(StructureError::DanglingParent { element, parent });
                }
            }
        }
        Ok(())
    }

    /// Add an element and return its index. Parents are given by the index `add` returned.
    pub fn add(&mut self, kind: ElementKind, parent: Option<usize>, positions: Vec<u32>) -> usize {
        debug_assert!(parent.map_or(true, |parent| parent < self.elements.len()));
        self.elements.push(ElementRecord {
            kind,
            parent,
            positions,
        });
        self.elements.len() - 1
    }

    pub fn element(&self, index: usize) -> Option<ElementRef<'_>> {
        (index < self.elements.len()).then_some(ElementRef {
            structure: self,
            index,
        })
    }

    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        (0..self.elements.len()).map(move |index| ElementRef {
            structure: self,
            index,
        })
    }

    /// Elements at the given indices, in that order; unknown indices are skipped
    pub fn select<'a>(&'a self, indices: &[usize]) -> Vec<ElementRef<'a>> {
        indices.iter().filter_map(|&index| self.element(index)).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn count_where(&self, predicate: impl Fn(ElementRef<'_>) -> bool) -> usize {
        self.elements().filter(|element| predicate(*element)).count()
    }

    fn parent_kind(&self, record: &ElementRecord) -> Option<ElementKind> {
        record
            .parent
            .and_then(|parent| self.elements.get(parent))
            .map(|parent| parent.kind)
    }
}

impl DrawingModel for Structure {
    fn helix_count(&self) -> usize {
        self.count_where(|element| element.kind() == ElementKind::Helix)
    }

    fn junction_count(&self, topology: Option<JunctionTopology>) -> usize {
        self.count_where(|element| match element.kind() {
            ElementKind::Junction { topology: found } => {
                topology.map_or(true, |wanted| wanted == found)
            }
            _ => false,
        })
    }

    fn single_strand_count(&self) -> usize {
        self.count_where(|element| element.kind() == ElementKind::SingleStrand)
    }

    fn phosphodiester_count(&self, host: Option<Host>) -> usize {
        self.count_where(|element| {
            element.kind() == ElementKind::PhosphodiesterBond
                && (host.is_none() || bond_host(element.parent_kind()) == host)
        })
    }

    fn secondary_interaction_count(&self) -> usize {
        self.count_where(|element| element.kind() == ElementKind::SecondaryInteraction)
    }

    fn interaction_symbol_count(&self) -> usize {
        self.count_where(|element| element.kind() == ElementKind::InteractionSymbol)
    }

    fn residue_count(&self, host: Option<Host>) -> usize {
        self.count_where(|element| {
            element.kind() == ElementKind::Residue
                && (host.is_none() || residue_host(element.parent_kind()) == host)
        })
    }
}

/// Borrowed handle on one element of a [`Structure`]
#[derive(Debug, Clone, Copy)]
pub struct ElementRef<'a> {
    structure: &'a Structure,
    index: usize,
}

impl<'a> ElementRef<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    fn record(&self) -> &'a ElementRecord {
        &self.structure.elements[self.index]
    }

    pub fn parent_kind(&self) -> Option<ElementKind> {
        self.structure.parent_kind(self.record())
    }
}

impl DrawingElement for ElementRef<'_> {
    fn id(&self) -> usize {
        self.index
    }

    fn kind(&self) -> ElementKind {
        self.record().kind
    }

    fn parent(&self) -> Option<Self> {
        self.record()
            .parent
            .and_then(|parent| self.structure.element(parent))
    }

    fn positions(&self) -> &[u32] {
        &self.record().positions
    }
}
