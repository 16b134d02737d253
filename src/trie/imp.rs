use super::bindings::{Bindings, Lookup};
use super::error::InsertError;
use super::{Node, Trie};

use std::collections::HashMap;
use std::fmt;

use smallvec::SmallVec;

impl Trie {
    pub fn new() -> Self {
        Self {
            root: Node::default(),
        }
    }

    pub fn clear(&mut self) {
        self.root = Node::default();
    }

    pub fn insert(&mut self, pattern: &str, user_ids: &[u32], key: &str) -> &mut Self {
        if let Err(e) = self.try_insert(pattern, user_ids, key) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(
        &mut self,
        pattern: &str,
        user_ids: &[u32],
        key: &str,
    ) -> Result<&mut Self, InsertError> {
        let mut ids: SmallVec<[u32; 8]> = SmallVec::from_slice(user_ids);
        ids.sort_unstable();
        let mut wildcards = HashMap::new();
        self.root.insert_at(pattern, &ids, key, &mut wildcards, 0)?;
        Ok(self)
    }

    pub fn lookup(&self, path: &str, user_id: u32) -> Lookup {
        let mut captured = HashMap::new();
        let (exists, allowed, hits) = self.root.match_at(path, user_id, 0, &mut captured);
        let mut bindings = Bindings::new();
        for (spec, value) in hits {
            match spec.strip_prefix(';') {
                Some(names) => {
                    for (name, val) in names.split(';').zip(value.split(';').skip(1)) {
                        bindings.set(name.to_owned(), val.to_owned());
                    }
                }
                None => bindings.set(spec.to_owned(), value),
            }
        }
        Lookup::new(exists, allowed, bindings)
    }

    pub fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Trie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.dump_into(f, "")
    }
}
