/// Module for managing the original source code.
pub mod source_buffer;

/// Module for turning a stream of source text into whitespace delimited tokens.
pub mod tokenizing;

/// Module defining the pre-resolved instructions and the closures built from them.
pub mod code;

/// Module for resolving tokens against the word table, either to run them right away or to
/// compile them into the body of a bracketed block.
pub mod compilation;

/// The program, written in SkynetRPN itself, that is run once before any user code.
pub mod bootstrap;
