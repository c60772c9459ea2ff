//! Character trie over a frequency list, rebuilt one first-letter bucket at a
//! time.

pub mod bucket;
pub mod node;

pub use bucket::{BucketedTrie, FreqSource};
pub use node::{FreqTrie, TrieNode};
