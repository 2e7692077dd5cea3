use crate::{
    add_native_word,
    runtime::{data_structures::value::ToValue, error, interpreter::Interpreter},
};

/// Join two strings, the one second from the top comes first.
///
/// Signature: `a b -- ab`
fn word_concat(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop_as_string()?;
    let a = interpreter.pop_as_string()?;

    interpreter.push((a + &b).to_value());
    Ok(())
}

/// Register the string words.
pub fn register_string_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "concat",
        word_concat,
        "Join two strings together.",
        "a b -- ab"
    );
}
