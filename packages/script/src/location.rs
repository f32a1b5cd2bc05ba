//! Residue ranges a rule applies to.
//!
//! Blocks keep their insertion order: nothing here sorts, merges or deduplicates them.
//! In the script a location is a `location { ... }` block holding one range leaf per
//! block, each range leaf carrying its two ends as separate fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ScriptError, ScriptResult};
use crate::node::{Container, Node};

pub const LOCATION_BLOCK: &str = "location";

/// Inclusive residue range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub start: u32,
    pub end: u32,
}

impl Block {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Positions covered, in ascending order. A reversed block covers nothing.
    pub fn positions(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }

    pub fn contains(&self, position: u32) -> bool {
        (self.start..=self.end).contains(&position)
    }
}

impl From<(u32, u32)> for Block {
    fn from((start, end): (u32, u32)) -> Self {
        Self::new(start, end)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location {
    blocks: Vec<Block>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ranges(ranges: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            blocks: ranges.into_iter().map(Block::from).collect(),
        }
    }

    /// Smallest set of blocks covering every given position
    pub fn from_positions(positions: impl IntoIterator<Item = u32>) -> Self {
        let mut sorted: Vec<u32> = positions.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        let mut location = Self::new();
        let mut iter = sorted.into_iter();
        let Some(first) = iter.next() else {
            return location;
        };

        let mut current = Block::new(first, first);
        for position in iter {
            if current.end.checked_add(1) == Some(position) {
                current.end = position;
            } else {
                location.blocks.push(current);
                current = Block::new(position, position);
            }
        }
        location.blocks.push(current);
        location
    }

    pub fn add_block(&mut self, start: u32, end: u32) {
        self.blocks.push(Block::new(start, end));
    }

    pub fn with_block(mut self, start: u32, end: u32) -> Self {
        self.add_block(start, end);
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Every covered position, block by block, repeats included
    pub fn positions(&self) -> impl Iterator<Item = u32> + '_ {
        self.blocks.iter().flat_map(Block::positions)
    }

    pub fn contains(&self, position: u32) -> bool {
        self.blocks.iter().any(|block| block.contains(position))
    }

    /// `location { <start> to <end> ... }`
    pub fn encode(&self) -> Container {
        self.blocks
            .iter()
            .fold(Container::new(LOCATION_BLOCK), |block, range| block.with_child(*range))
    }

    pub fn decode(container: &Container) -> ScriptResult<Self> {
        if container.name != LOCATION_BLOCK {
            return Err(ScriptError::unexpected_block(LOCATION_BLOCK, &container.name));
        }

        let blocks = container
            .children()
            .iter()
            .map(|child| match child {
                Node::Range(block) => Ok(*block),
                other => Err(ScriptError::not_a_range(LOCATION_BLOCK, other.name())),
            })
            .collect::<ScriptResult<Vec<_>>>()?;

        Ok(Self { blocks })
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, block) in self.blocks.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}-{}", block.start, block.end)?;
        }
        Ok(())
    }
}
