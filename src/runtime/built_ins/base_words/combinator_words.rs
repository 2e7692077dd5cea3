use crate::{
    add_native_word,
    lang::code::Closure,
    runtime::{
        data_structures::value::ToValue,
        error,
        interpreter::Interpreter,
    },
};

/// Call the closure only if the condition is true.
///
/// Signature: `bool closure -- ...`
fn word_if(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let closure = interpreter.pop_as_closure()?;
    let condition = interpreter.pop_as_bool()?;

    if condition {
        interpreter.call_closure(&closure)?;
    }

    Ok(())
}

/// Call exactly one of the two closures depending on the condition.
///
/// Signature: `bool if-true if-false -- ...`
fn word_choose(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let if_false = interpreter.pop_as_closure()?;
    let if_true = interpreter.pop_as_closure()?;
    let condition = interpreter.pop_as_bool()?;

    if condition {
        interpreter.call_closure(&if_true)
    } else {
        interpreter.call_closure(&if_false)
    }
}

/// Run the condition closure, and as long as it leaves true on the stack run the body and then the
/// condition again.
///
/// Signature: `condition body -- ...`
fn word_while(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let body = interpreter.pop_as_closure()?;
    let condition = interpreter.pop_as_closure()?;

    loop {
        interpreter.call_closure(&condition)?;

        if !interpreter.pop_as_bool()? {
            break;
        }

        interpreter.call_closure(&body)?;
    }

    Ok(())
}

/// Call the closure once for every value in the array, with the value pushed first.  Values
/// appended by the closure itself are not visited.
///
/// Signature: `array closure -- ...`
fn word_for_each(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let closure = interpreter.pop_as_closure()?;
    let array = interpreter.pop_as_array()?;

    let length = array.borrow().len();

    for index in 0..length {
        let value = array.borrow().get(index);
        let Some(value) = value else { break };

        interpreter.push(value);
        interpreter.call_closure(&closure)?;
    }

    Ok(())
}

/// Bind a value to a closure.  The new closure pushes the value and then runs the original.
///
/// Signature: `value closure -- closure`
fn word_curry(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let closure = interpreter.pop_as_closure()?;
    let value = interpreter.pop()?;

    interpreter.push(Closure::curried(value, closure).to_value());
    Ok(())
}

/// Call the closure for every integer from zero up to and including the limit, with the integer
/// pushed first.  A negative limit runs nothing.
///
/// Signature: `limit closure -- ...`
fn word_zero_through(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let closure = interpreter.pop_as_closure()?;
    let limit = interpreter.pop_as_int()?;

    for index in 0..=limit {
        interpreter.push(index.to_value());
        interpreter.call_closure(&closure)?;
    }

    Ok(())
}

/// Register the combinators.
pub fn register_combinator_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "if",
        word_if,
        "Call the closure if the condition is true.",
        "bool closure -- ..."
    );

    add_native_word!(
        interpreter,
        "choose",
        word_choose,
        "Call one of two closures depending on the condition.",
        "bool if-true if-false -- ..."
    );

    add_native_word!(
        interpreter,
        "while",
        word_while,
        "Repeat the body while the condition closure leaves true.",
        "condition body -- ..."
    );

    add_native_word!(
        interpreter,
        "for-each",
        word_for_each,
        "Call the closure for each value of the array.",
        "array closure -- ..."
    );

    add_native_word!(
        interpreter,
        "curry",
        word_curry,
        "Bind a value to a closure.",
        "value closure -- closure"
    );

    add_native_word!(
        interpreter,
        "0-through",
        word_zero_through,
        "Call the closure for each integer from zero to the limit.",
        "limit closure -- ..."
    );
}
