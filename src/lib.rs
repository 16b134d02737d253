mod userset;

pub mod trie;
pub use self::trie::{Bindings, InsertError, Lookup, Trie};
