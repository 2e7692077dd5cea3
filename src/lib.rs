/// Module for managing the incoming source text, turning it into tokens and compiling bracketed
/// blocks into closures.  Also holds the bootstrap program that extends the language at startup.
#[macro_use]
pub mod lang;

/// Module for the runtime and the data structures used by the interpreter.  As well as the
/// interpreter itself.
#[macro_use]
pub mod runtime;
