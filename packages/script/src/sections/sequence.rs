//! Where the secondary structure comes from.
//!
//! ```text
//! ss {
//!    bn {
//!        value = "((((....))))"
//!        seq = "GGGGAAAACCCC"
//!        name = "hairpin"
//!    }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::node::{Container, Node, Property};

pub const SEQUENCE_BLOCK: &str = "ss";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum SequenceSource {
    /// Inline dot-bracket notation with its sequence
    Bn {
        value: String,
        seq: String,
        #[serde(default)]
        name: Option<String>,
    },
    Vienna {
        file: String,
    },
    Ct {
        file: String,
    },
    Bpseq {
        file: String,
    },
    Stockholm {
        file: String,
    },
    Pdb {
        file: String,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        id: Option<String>,
    },
}

impl SequenceSource {
    pub fn bracket_notation(value: impl Into<String>, seq: impl Into<String>) -> Self {
        SequenceSource::Bn {
            value: value.into(),
            seq: seq.into(),
            name: None,
        }
    }

    fn block_name(&self) -> &'static str {
        match self {
            SequenceSource::Bn { .. } => "bn",
            SequenceSource::Vienna { .. } => "vienna",
            SequenceSource::Ct { .. } => "ct",
            SequenceSource::Bpseq { .. } => "bpseq",
            SequenceSource::Stockholm { .. } => "stockholm",
            SequenceSource::Pdb { .. } => "pdb",
        }
    }

    fn source_block(&self) -> Container {
        let mut block = Container::new(self.block_name());
        match self {
            SequenceSource::Bn { value, seq, name } => {
                block.add_child(Property::string("value", value));
                block.add_child(Property::string("seq", seq));
                if let Some(name) = name {
                    block.add_child(Property::string("name", name));
                }
            }
            SequenceSource::Vienna { file }
            | SequenceSource::Ct { file }
            | SequenceSource::Bpseq { file }
            | SequenceSource::Stockholm { file } => {
                block.add_child(Property::string("file", file));
            }
            SequenceSource::Pdb { file, name, id } => {
                block.add_child(Property::string("file", file));
                if let Some(name) = name {
                    block.add_child(Property::string("name", name));
                }
                if let Some(id) = id {
                    block.add_child(Property::string("id", id));
                }
            }
        }
        block
    }

    /// `ss { <source> { ... } }`
    pub fn to_container(&self) -> Container {
        Container::new(SEQUENCE_BLOCK).with_child(self.source_block())
    }
}

impl From<&SequenceSource> for Node {
    fn from(source: &SequenceSource) -> Self {
        Node::Container(source.to_container())
    }
}
