use crate::{
    add_native_word,
    runtime::{
        data_structures::value::ToValue,
        error::{self, script_error, ErrorKind},
        interpreter::Interpreter,
    },
};

/// Pop two integers and push the result of the operation.  The value second from the top is the
/// left hand operand.
fn int_op(interpreter: &mut dyn Interpreter, op: fn(i64, i64) -> i64) -> error::Result<()> {
    let b = interpreter.pop_as_int()?;
    let a = interpreter.pop_as_int()?;

    interpreter.push(op(a, b).to_value());
    Ok(())
}

/// Like int_op, but a zero right hand operand is a division by zero.
fn int_division_op(
    interpreter: &mut dyn Interpreter,
    op: fn(i64, i64) -> i64,
) -> error::Result<()> {
    let b = interpreter.pop_as_int()?;
    let a = interpreter.pop_as_int()?;

    if b == 0 {
        return script_error(interpreter, ErrorKind::DivisionByZero);
    }

    interpreter.push(op(a, b).to_value());
    Ok(())
}

/// Add two integers.
///
/// Signature: `a b -- a+b`
fn word_add(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    int_op(interpreter, i64::wrapping_add)
}

/// Subtract the top integer from the one below it.
///
/// Signature: `a b -- a-b`
fn word_subtract(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    int_op(interpreter, i64::wrapping_sub)
}

/// Multiply two integers.
///
/// Signature: `a b -- a*b`
fn word_multiply(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    int_op(interpreter, i64::wrapping_mul)
}

/// Divide, truncating toward zero.
///
/// Signature: `a b -- a/b`
fn word_divide(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    int_division_op(interpreter, i64::wrapping_div)
}

/// The remainder of a truncating division, it takes the sign of the dividend.
///
/// Signature: `a b -- a%b`
fn word_mod(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    int_division_op(interpreter, i64::wrapping_rem)
}

/// Register the arithmetic words.
pub fn register_simple_arithmetic_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(interpreter, "+", word_add, "Add two integers.", "a b -- result");

    add_native_word!(
        interpreter,
        "-",
        word_subtract,
        "Subtract the top integer from the one below it.",
        "a b -- result"
    );

    add_native_word!(
        interpreter,
        "*",
        word_multiply,
        "Multiply two integers.",
        "a b -- result"
    );

    add_native_word!(
        interpreter,
        "/",
        word_divide,
        "Divide two integers, truncating toward zero.",
        "a b -- result"
    );

    add_native_word!(
        interpreter,
        "%",
        word_mod,
        "Remainder of dividing two integers.",
        "a b -- result"
    );
}
