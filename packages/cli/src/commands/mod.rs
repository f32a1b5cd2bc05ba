pub mod compact;
pub mod script;

pub use compact::{compact, CompactArgs};
pub use script::{script, ScriptArgs};
