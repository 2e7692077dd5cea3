use crate::{
    add_native_word,
    runtime::{data_structures::value::ToValue, error, interpreter::Interpreter},
};

/// Pop two integers and push the result of comparing them, second from the top on the left.
fn comparison_op(interpreter: &mut dyn Interpreter, op: fn(&i64, &i64) -> bool) -> error::Result<()> {
    let b = interpreter.pop_as_int()?;
    let a = interpreter.pop_as_int()?;

    interpreter.push(op(&a, &b).to_value());
    Ok(())
}

/// Bitwise exclusive or of two integers.
///
/// Signature: `a b -- a^b`
fn word_xor(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop_as_int()?;
    let a = interpreter.pop_as_int()?;

    interpreter.push((a ^ b).to_value());
    Ok(())
}

/// Is the second value greater than the top value?
///
/// Signature: `a b -- a>b`
fn word_greater(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    comparison_op(interpreter, i64::gt)
}

/// Is the second value less than the top value?
///
/// Signature: `a b -- a<b`
fn word_less(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    comparison_op(interpreter, i64::lt)
}

/// Compare any two values.  Arrays compare by content and closures by identity, so `dup eq?` is
/// always true.
///
/// Signature: `a b -- bool`
fn word_equal(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let b = interpreter.pop()?;
    let a = interpreter.pop()?;

    interpreter.push((a == b).to_value());
    Ok(())
}

/// Register the comparison, bit and equality words.
pub fn register_math_logic_and_bit_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "^",
        word_xor,
        "Bitwise exclusive or of two integers.",
        "a b -- result"
    );

    add_native_word!(
        interpreter,
        ">",
        word_greater,
        "Is the second integer greater than the top one?",
        "a b -- bool"
    );

    add_native_word!(
        interpreter,
        "<",
        word_less,
        "Is the second integer less than the top one?",
        "a b -- bool"
    );

    add_native_word!(
        interpreter,
        "eq?",
        word_equal,
        "Are the top two values equal?",
        "a b -- bool"
    );
}
