/// The core words of the language.
pub mod base_words;

/// Words that print to the output sink.
pub mod io_words;
