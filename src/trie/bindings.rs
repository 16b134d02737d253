#![forbid(unsafe_code)]

use std::fmt::{self, Debug};
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

pub struct Bindings {
    buf: SmallVec<[(String, String); 4]>,
}

impl Bindings {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf.iter().find_map(|(k, v)| {
            if k.as_str() == name {
                Some(v.as_str())
            } else {
                None
            }
        })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }
}

impl Deref for Bindings {
    type Target = [(String, String)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl Bindings {
    pub(super) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    pub(super) fn set(&mut self, name: String, value: String) {
        match self.buf.iter().position(|(k, _)| *k == name) {
            Some(i) => self.buf[i].1 = value,
            None => self.buf.push((name, value)),
        }
    }
}

impl Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.buf.iter().map(|(k, v)| (k, v)))
            .finish()
    }
}

#[derive(Debug)]
pub struct Lookup {
    exists: bool,
    allowed: bool,
    bindings: Bindings,
}

impl Lookup {
    pub(super) fn new(exists: bool, allowed: bool, bindings: Bindings) -> Self {
        Self {
            exists,
            allowed,
            bindings,
        }
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn allowed(&self) -> bool {
        self.allowed
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn into_bindings(self) -> Bindings {
        self.bindings
    }
}
