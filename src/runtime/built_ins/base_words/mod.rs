/// Integer arithmetic.
mod simple_arithmetic_words;

/// Words that manipulate the data and aux stacks.
mod stack_words;

/// Simple constants.
mod constant_words;

/// The handlers of the builtin literal sigils.
mod sigil_words;

/// Words that create and call words.
mod word_creation_words;

/// Words that run the closures they're given.
mod combinator_words;

/// Words that work with strings.
mod string_words;

/// Words that work with arrays.
mod array_words;

/// Words that work with comparison, bit manipulation and Value equality.
mod math_logic_and_bit_words;

use crate::runtime::{
    built_ins::base_words::{
        array_words::register_array_words, combinator_words::register_combinator_words,
        constant_words::register_constant_words,
        math_logic_and_bit_words::register_math_logic_and_bit_words,
        sigil_words::register_sigil_words,
        simple_arithmetic_words::register_simple_arithmetic_words,
        stack_words::register_stack_words, string_words::register_string_words,
        word_creation_words::register_word_creation_words,
    },
    interpreter::Interpreter,
};

/// Called to register all of the core words of the language.
pub fn register_base_words(interpreter: &mut dyn Interpreter) {
    register_stack_words(interpreter);
    register_constant_words(interpreter);
    register_simple_arithmetic_words(interpreter);
    register_sigil_words(interpreter);
    register_word_creation_words(interpreter);
    register_combinator_words(interpreter);
    register_string_words(interpreter);
    register_array_words(interpreter);
    register_math_logic_and_bit_words(interpreter);
}
