use crate::{
    add_native_word,
    runtime::{
        data_structures::{value::ToValue, value_vec::ValueVec},
        error,
        interpreter::Interpreter,
    },
};

/// Print the top value of the stack.
///
/// Signature: `value -- `
fn word_print(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;

    interpreter.emit(&value.to_string())
}

/// Print the whole data stack, bottom first, without changing it.
///
/// Signature: ` -- `
fn word_print_stack(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let stack = ValueVec::from_vec(interpreter.stack().clone());
    let text = stack.to_value().to_string();

    interpreter.emit(&text)
}

/// Register the output words.
pub fn register_io_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        ".",
        word_print,
        "Print the top value of the stack.",
        "value -- "
    );

    add_native_word!(
        interpreter,
        "dbg",
        word_print_stack,
        "Print the whole data stack.",
        " -- "
    );
}
