//! Name Forge - brand and product name generation
//!
//! A library of lexical transformation techniques (blends, affixation,
//! portmanteaus, spoonerisms, acronyms, misspellings) for turning seed
//! words into candidate names, plus a scrubber for cleaning the results
//! and a bounded randomized backronym search.

pub mod backronym;
pub mod classify;
pub mod error;
pub mod oracle;
pub mod recycle;
pub mod scrub;
pub mod techniques;
pub mod types;

// Re-export commonly used types
pub use error::{NameForgeError, Result};
pub use types::{BackronymConfig, BackronymResult, ResultTree, ScrubConfig};

// Re-export main functionality
pub use backronym::{backronym, BackronymSearch};
pub use oracle::{Dictionary, PosTagger, WordList};
pub use recycle::{recycle, try_recycle};
pub use scrub::{super_scrub, Scrubber};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
