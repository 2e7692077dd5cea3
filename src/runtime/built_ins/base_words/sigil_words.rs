use crate::{
    add_native_word,
    runtime::{
        config::QuoteStyle,
        data_structures::value::{ToValue, Value},
        error::{self, script_error, ErrorKind},
        interpreter::Interpreter,
    },
};

// Each handler is called with the text following its sigil character already pushed as a string.

/// Parse the text as a decimal integer, with an optional sign.
///
/// Signature: `text -- integer`
fn word_sigil_int(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let text = interpreter.pop_as_string()?;

    match text.parse::<i64>() {
        Ok(value) => {
            interpreter.push(value.to_value());
            Ok(())
        }

        Err(_) => script_error(interpreter, ErrorKind::NumericParse(text)),
    }
}

/// A string literal.  Underscores become spaces unless the interpreter is configured for verbatim
/// strings.
///
/// Signature: `text -- string`
fn word_sigil_string(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let text = interpreter.pop_as_string()?;

    let text = match interpreter.config().quote_style {
        QuoteStyle::UnderscoreToSpace => text.replace('_', " "),
        QuoteStyle::Verbatim => text,
    };

    interpreter.push(text.to_value());
    Ok(())
}

/// Push the closure of the named word.  The word is looked up when the literal runs, not when it's
/// compiled.
///
/// Signature: `name -- closure`
fn word_sigil_word_ref(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let name = interpreter.pop_as_string()?;

    let closure = match interpreter.find_word(&name) {
        Some(word) => word.closure.clone(),
        None => return script_error(interpreter, ErrorKind::UnknownWord(name)),
    };

    interpreter.push(closure.to_value());
    Ok(())
}

/// Store a value in the named variable.
///
/// Signature: `value name -- `
fn word_sigil_store(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let name = interpreter.pop_as_string()?;
    let value = interpreter.pop()?;

    interpreter.set_variable(&name, value);
    Ok(())
}

/// Push the value of the named variable.  A variable that was never written reads as the absent
/// value, or is an error when strict variables are enabled.
///
/// Signature: `name -- value`
fn word_sigil_fetch(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let name = interpreter.pop_as_string()?;

    let value = match interpreter.variable(&name) {
        Some(value) => value.clone(),
        None if interpreter.config().strict_variables => {
            return script_error(interpreter, ErrorKind::UndefinedVariable(name));
        }
        None => Value::None,
    };

    interpreter.push(value);
    Ok(())
}

/// Register the handlers of the builtin sigils.  The `/` sigil lives with the array words.
pub fn register_sigil_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "sigil:#",
        word_sigil_int,
        "Integer literal.",
        "text -- integer"
    );

    add_native_word!(
        interpreter,
        "sigil:'",
        word_sigil_string,
        "String literal.",
        "text -- string"
    );

    add_native_word!(
        interpreter,
        "sigil:&",
        word_sigil_word_ref,
        "Push the closure of a named word.",
        "name -- closure"
    );

    add_native_word!(
        interpreter,
        "sigil:!",
        word_sigil_store,
        "Store the value below in the named variable.",
        "value name -- "
    );

    add_native_word!(
        interpreter,
        "sigil:@",
        word_sigil_fetch,
        "Push the value of the named variable.",
        "name -- value"
    );
}
