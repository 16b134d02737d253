mod bindings;
mod core;
mod error;
mod imp;
mod segment;

pub use self::bindings::{Bindings, Lookup};
pub use self::error::InsertError;

use crate::userset::UserSet;

use std::collections::HashMap;

use regex::Regex;

#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
}

#[derive(Debug, Default)]
struct Node {
    children: HashMap<String, Node>,
    regexps: Vec<(String, Regex)>,
    labels: HashMap<usize, HashMap<String, String>>,
    members: Option<UserSet>,
    leaf: bool,
}
