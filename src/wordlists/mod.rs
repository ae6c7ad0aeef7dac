//! Word lists and the dictionary handle
//!
//! Provides an embedded common-word list compiled into the binary and a
//! loader for larger newline-separated lists such as `words_alpha.txt`.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{COMMON, COMMON_COUNT};
