/// Module contains the Value enumeration and it's implementation.  The value is one of the core
/// data structures of the interpreter.  It is used to represent all data types that flow through
/// the data and aux stacks, the variables and arrays.
pub mod value;

/// Represent a shared, mutable array of values useable by scripts in the runtime.
pub mod value_vec;

/// The word table used by the interpreter.
pub mod dictionary;
