//! Marker-delimited region splitting for regen.
//!
//! A region is the text strictly between two literal markers:
//!
//! ```text
//! // regen:begin
//! generated content
//! // regen:end
//! ```
//!
//! Everything here works on plain substrings. There is no grammar and no
//! regex; the first occurrence of the start marker wins, and the end marker
//! is searched for only in the text after it.

pub mod error;
pub mod pair;
pub mod split;

pub use error::{Error, Result, Which};
pub use pair::MarkerPair;
pub use split::{Split, split_once};
