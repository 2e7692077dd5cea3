/// All of the core data structures used by the interpreter.
pub mod data_structures;

/// Module for defining the built-in native words that are available to the interpreter.
pub mod built_ins;

/// Module for defining the error reporting of the interpreter.
pub mod error;

/// Module for defining the core functionality of the interpreter.  This includes tools for
/// managing and examining the interpreter's state.
pub mod interpreter;

/// Settings that pick between the language's dialects.
pub mod config;

/// Where printed values go.
pub mod output;

/// Native stack growth for deeply nested blocks and deeply recursive words.
pub mod stack_guard;
