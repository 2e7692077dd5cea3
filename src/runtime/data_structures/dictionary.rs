use crate::{ lang::{ code::Closure,
                     source_buffer::SourceLocation } };
use std::collections::HashMap;

/// The type of a word in the dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WordType {
    /// The word is a native word written in Rust.
    Native,

    /// The word was installed by `def` from a script.
    Scripted,
}

/// The information stored in the word dictionary for each word.
#[derive(Clone)]
pub struct WordInfo {
    /// The location in the source code where the word was defined.
    pub location: SourceLocation,

    pub name: String,

    pub word_type: WordType,

    /// A simple description of the word.
    pub description: String,

    /// The stack signature of the word.
    pub signature: String,

    /// What runs when the word is invoked.  The `&` sigil pushes this closure.
    pub closure: Closure,
}

/// The word table.  A flat, global map, words are added or replaced but never removed.  Builtins
/// live here alongside script defined words and can be shadowed by them.
#[derive(Default)]
pub struct Dictionary {
    words: HashMap<String, WordInfo>,
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary::default()
    }

    /// Insert a word, returning the definition it replaced, if any.
    pub fn insert(&mut self, name: String, info: WordInfo) -> Option<WordInfo> {
        self.words.insert(name, info)
    }

    pub fn try_get(&self, name: &str) -> Option<&WordInfo> {
        self.words.get(name)
    }

    /// How many words are defined.
    pub fn len(&self) -> usize {
        self.words.len()
    }
}
