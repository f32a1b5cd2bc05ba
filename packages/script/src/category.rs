//! Categories of drawn elements and the tags naming them in rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ScriptError, ScriptResult};

/// Shape of a structural loop, from the number of helices meeting there
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum JunctionTopology {
    #[serde(rename = "apical_loop")]
    ApicalLoop,
    #[serde(rename = "inner_loop")]
    InnerLoop,
    #[serde(rename = "3_way")]
    ThreeWay,
    #[serde(rename = "4_way")]
    FourWay,
    #[serde(rename = "junction")]
    Other,
}

impl JunctionTopology {
    pub const ALL: [JunctionTopology; 5] = [
        JunctionTopology::ApicalLoop,
        JunctionTopology::InnerLoop,
        JunctionTopology::ThreeWay,
        JunctionTopology::FourWay,
        JunctionTopology::Other,
    ];

    pub fn from_helix_count(helices: usize) -> Self {
        match helices {
            1 => JunctionTopology::ApicalLoop,
            2 => JunctionTopology::InnerLoop,
            3 => JunctionTopology::ThreeWay,
            4 => JunctionTopology::FourWay,
            _ => JunctionTopology::Other,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            JunctionTopology::ApicalLoop => "apical_loop",
            JunctionTopology::InnerLoop => "inner_loop",
            JunctionTopology::ThreeWay => "3_way",
            JunctionTopology::FourWay => "4_way",
            JunctionTopology::Other => "junction",
        }
    }
}

impl fmt::Display for JunctionTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for JunctionTopology {
    type Err = ScriptError;

    fn from_str(s: &str) -> ScriptResult<Self> {
        JunctionTopology::ALL
            .into_iter()
            .find(|topology| topology.tag() == s)
            .ok_or_else(|| ScriptError::unknown_topology(s))
    }
}

/// Structural element a residue or backbone bond belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Host {
    Helix,
    Junction(JunctionTopology),
    SingleStrand,
}

impl Host {
    pub fn tag(self) -> &'static str {
        match self {
            Host::Helix => "helix",
            Host::Junction(topology) => topology.tag(),
            Host::SingleStrand => "single_strand",
        }
    }
}

impl FromStr for Host {
    type Err = ScriptError;

    fn from_str(s: &str) -> ScriptResult<Self> {
        match s {
            "helix" => Ok(Host::Helix),
            "single_strand" => Ok(Host::SingleStrand),
            other => other
                .parse()
                .map(Host::Junction)
                .map_err(|_| ScriptError::unknown_category(s)),
        }
    }
}

/// Rule target: one kind of drawn element, optionally narrowed to its host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Category {
    Helix,
    Junction(JunctionTopology),
    SingleStrand,
    PhosphodiesterBond(Option<Host>),
    SecondaryInteraction,
    InteractionSymbol,
    Residue(Option<Host>),
    ResidueLetter,
}

const BOND: &str = "phosphodiester_bond";
const RESIDUE: &str = "N";

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Helix => f.write_str("helix"),
            Category::Junction(topology) => f.write_str(topology.tag()),
            Category::SingleStrand => f.write_str("single_strand"),
            Category::PhosphodiesterBond(None) => f.write_str(BOND),
            Category::PhosphodiesterBond(Some(host)) => write!(f, "{}@{}", BOND, host.tag()),
            Category::SecondaryInteraction => f.write_str("secondary_interaction"),
            Category::InteractionSymbol => f.write_str("interaction_symbol"),
            Category::Residue(None) => f.write_str(RESIDUE),
            Category::Residue(Some(host)) => write!(f, "{}@{}", RESIDUE, host.tag()),
            Category::ResidueLetter => f.write_str("n"),
        }
    }
}

impl FromStr for Category {
    type Err = ScriptError;

    fn from_str(s: &str) -> ScriptResult<Self> {
        if let Some((base, host)) = s.split_once('@') {
            let host = host.parse::<Host>().map_err(|_| ScriptError::unknown_category(s))?;
            return match base {
                BOND => Ok(Category::PhosphodiesterBond(Some(host))),
                RESIDUE => Ok(Category::Residue(Some(host))),
                _ => Err(ScriptError::unknown_category(s)),
            };
        }

        match s {
            "helix" => Ok(Category::Helix),
            "single_strand" => Ok(Category::SingleStrand),
            BOND => Ok(Category::PhosphodiesterBond(None)),
            "secondary_interaction" => Ok(Category::SecondaryInteraction),
            "interaction_symbol" => Ok(Category::InteractionSymbol),
            RESIDUE => Ok(Category::Residue(None)),
            "n" => Ok(Category::ResidueLetter),
            other => other
                .parse()
                .map(Category::Junction)
                .map_err(|_| ScriptError::unknown_category(s)),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = ScriptError;

    fn try_from(value: String) -> ScriptResult<Self> {
        value.parse()
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.to_string()
    }
}
