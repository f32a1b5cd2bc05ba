//! # Selection Compactor
//!
//! Turns a selection of drawn elements into the fewest selectors that describe it.
//!
//! ## Algorithm
//!
//! 1. Each selected element is given a category from its kind and, for residues and
//!    backbone bonds, the kind of its parent. Elements with no category are skipped.
//! 2. Categories are visited once each, in the order they first appear.
//! 3. If the selection holds every element of the category that the drawing holds, the
//!    category is selected everywhere. Otherwise it is selected at the union of the
//!    positions of its selected elements.
//!
//! An element listed more than once counts once.

use std::collections::{HashMap, HashSet};

use rnartist_script::{Category, Location, Selector};
use tracing::{debug, instrument};

use crate::model::{bond_host, residue_host, DrawingElement, DrawingModel, ElementKind};

/// Category of an element, or `None` when it has no rule tag
pub fn categorize<E: DrawingElement>(element: &E) -> Option<Category> {
    let parent_kind = || element.parent().map(|parent| parent.kind());

    match element.kind() {
        ElementKind::Helix => Some(Category::Helix),
        ElementKind::Junction { topology } => Some(Category::Junction(topology)),
        ElementKind::SingleStrand => Some(Category::SingleStrand),
        ElementKind::PhosphodiesterBond => {
            Some(Category::PhosphodiesterBond(bond_host(parent_kind())))
        }
        ElementKind::SecondaryInteraction => Some(Category::SecondaryInteraction),
        ElementKind::InteractionSymbol => Some(Category::InteractionSymbol),
        ElementKind::Residue => Some(Category::Residue(residue_host(parent_kind()))),
        ElementKind::ResidueLetter => Some(Category::ResidueLetter),
        ElementKind::TertiaryInteraction | ElementKind::Pknot => None,
    }
}

struct Group {
    category: Category,
    members: HashSet<usize>,
    positions: Vec<u32>,
}

/// Compact a selection against the drawing it was made in
#[instrument(skip_all)]
pub fn compact<E, M>(elements: impl IntoIterator<Item = E>, model: &M) -> Vec<Selector>
where
    E: DrawingElement,
    M: DrawingModel + ?Sized,
{
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<Category, usize> = HashMap::new();

    for element in elements {
        let Some(category) = categorize(&element) else {
            debug!(kind = ?element.kind(), "Skipping element without a category");
            continue;
        };

        let slot = *index.entry(category).or_insert_with(|| {
            groups.push(Group {
                category,
                members: HashSet::new(),
                positions: Vec::new(),
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        if group.members.insert(element.id()) {
            group.positions.extend_from_slice(element.positions());
        } else {
            debug!(id = element.id(), "Element selected more than once");
        }
    }

    groups
        .into_iter()
        .map(|group| {
            let total = model.total(group.category);
            let selected = group.members.len();
            if selected == total {
                debug!(category = %group.category, total, "Whole category selected");
                Selector::everywhere(group.category)
            } else {
                debug!(category = %group.category, selected, total, "Partial selection");
                Selector::at(group.category, Location::from_positions(group.positions))
            }
        })
        .collect()
}
