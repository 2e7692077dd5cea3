use crate::{
    add_native_word,
    runtime::{
        data_structures::dictionary::WordType,
        error,
        interpreter::Interpreter,
    },
};

/// Install a closure as a word, replacing any word of the same name.  Builtins can be replaced
/// too.  Blocks already compiled keep the definition they were compiled against.
///
/// Signature: `name closure -- `
fn word_def(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let closure = interpreter.pop_as_closure()?;
    let name = interpreter.pop_as_string()?;

    let location = interpreter.current_location().clone().unwrap_or_default();

    interpreter.add_word(
        location,
        name,
        closure,
        String::new(),
        String::new(),
        WordType::Scripted,
    );

    Ok(())
}

/// Call the closure on top of the stack.
///
/// Signature: `closure -- ...`
fn word_call(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let closure = interpreter.pop_as_closure()?;

    interpreter.call_closure(&closure)
}

/// Register the words that create and call words.
pub fn register_word_creation_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "def",
        word_def,
        "Define a word from a name and a closure.",
        "name closure -- "
    );

    add_native_word!(
        interpreter,
        "call",
        word_call,
        "Call a closure.",
        "closure -- ..."
    );
}
