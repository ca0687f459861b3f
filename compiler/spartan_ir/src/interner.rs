//! String interner for identifiers and literal text.
//!
//! One interner backs one parse. Hosts that process many inputs in
//! parallel give each input its own interner, so no locking is needed.

use rustc_hash::FxHashMap;

use super::Name;

/// Maps text to [`Name`] handles and back.
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(64),
        };
        let empty = interner.intern("");
        debug_assert_eq!(empty, Name::EMPTY);
        interner
    }

    /// Intern `text`, returning the existing handle if it was seen before.
    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.map.get(text) {
            return name;
        }
        // Beyond u32::MAX distinct strings the last slot is reused; no
        // realistic expression gets near that.
        let index = u32::try_from(self.strings.len()).unwrap_or(u32::MAX);
        let name = Name::from_index(index);
        self.strings.push(text.into());
        self.map.insert(text.into(), name);
        name
    }

    /// Text for `name`. Unknown handles resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| &**s)
    }

    /// Number of distinct strings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}
