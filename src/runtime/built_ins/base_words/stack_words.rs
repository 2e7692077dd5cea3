use crate::{
    add_native_word,
    runtime::{error, interpreter::Interpreter},
};

/// Duplicate the top value on the data stack.  Arrays and closures are shared, not copied.
///
/// Signature: `value -- value value`
fn word_dup(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push(value.clone());
    interpreter.push(value);

    Ok(())
}

/// Drop the top value on the data stack.
///
/// Signature: `value -- `
fn word_pop(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let _ = interpreter.pop()?;

    Ok(())
}

/// Swap the top 2 values on the data stack.
///
/// Signature: `a b -- b a`
fn word_swap(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push(b);
    interpreter.push(a);

    Ok(())
}

/// Move the top of the data stack onto the aux stack.
///
/// Signature: `value -- `
fn word_to_aux(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.push_aux(value);
    Ok(())
}

/// Move the top of the aux stack back onto the data stack.
///
/// Signature: ` -- value`
fn word_from_aux(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop_aux()?;

    interpreter.push(value);
    Ok(())
}

/// Register the stack words.
pub fn register_stack_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "dup",
        word_dup,
        "Duplicate the top value on the data stack.",
        "value -- value value"
    );

    add_native_word!(
        interpreter,
        "pop",
        word_pop,
        "Discard the top value on the data stack.",
        "value -- "
    );

    add_native_word!(
        interpreter,
        "swap",
        word_swap,
        "Swap the top 2 values on the data stack.",
        "a b -- b a"
    );

    add_native_word!(
        interpreter,
        "->",
        word_to_aux,
        "Move the top value of the data stack to the aux stack.",
        "value -- "
    );

    add_native_word!(
        interpreter,
        "<-",
        word_from_aux,
        "Move the top value of the aux stack to the data stack.",
        " -- value"
    );
}
