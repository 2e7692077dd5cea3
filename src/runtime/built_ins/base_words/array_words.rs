use crate::{
    add_native_word,
    runtime::{
        data_structures::{
            value::{ToValue, Value},
            value_vec::{ValueVec, ValueVecPtr},
        },
        error::{self, script_error, ErrorKind},
        interpreter::Interpreter,
    },
};

/// Check if the index is within the bounds of the array, converting it to a usize if it is.
fn check_bounds(
    interpreter: &mut dyn Interpreter,
    array: &ValueVecPtr,
    index: i64,
) -> error::Result<usize> {
    let length = array.borrow().len();

    match usize::try_from(index) {
        Ok(position) if position < length => Ok(position),
        _ => script_error(interpreter, ErrorKind::IndexOutOfRange { index, length }),
    }
}

/// Start an array literal by pushing the marker.
///
/// Signature: ` -- marker`
fn word_array_start(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    interpreter.push(Value::Marker);
    Ok(())
}

/// Collect everything above the nearest marker into a new array, keeping the order they were
/// pushed in.  The marker itself is dropped.
///
/// Signature: `marker values... -- array`
fn word_array_end(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let mut values = Vec::new();

    loop {
        let value = interpreter.pop()?;

        if value.is_marker() {
            break;
        }

        values.push(value);
    }

    values.reverse();

    interpreter.push(ValueVec::from_vec(values).to_value());
    Ok(())
}

/// Create a new array of the given size, every slot holding the absent value.
///
/// Signature: `size -- array`
fn word_array_new(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let size = interpreter.pop_as_int()?;

    let Ok(size) = usize::try_from(size) else {
        return script_error(
            interpreter,
            ErrorKind::IndexOutOfRange {
                index: size,
                length: 0,
            },
        );
    };

    interpreter.push(ValueVec::new(size).to_value());
    Ok(())
}

/// Read a value from the array at the given index and push it onto the stack.
///
/// Signature: `array index -- value`
fn word_array_read_index(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let index = interpreter.pop_as_int()?;
    let array = interpreter.pop_as_array()?;

    let index = check_bounds(interpreter, &array, index)?;
    let value = array.borrow().get(index).unwrap_or_default();

    interpreter.push(value);
    Ok(())
}

/// Write a value to the array at the given index.  The same array is pushed back, so every other
/// holder of it sees the change.
///
/// Signature: `array index value -- array`
fn word_array_write_index(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;
    let index = interpreter.pop_as_int()?;
    let array = interpreter.pop_as_array()?;

    let index = check_bounds(interpreter, &array, index)?;
    array.borrow_mut().set(index, value);

    interpreter.push(array.to_value());
    Ok(())
}

/// Append a value to the end of the array, growing it in place.
///
/// Signature: `array value -- array`
fn word_array_push_back(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let value = interpreter.pop()?;
    let array = interpreter.pop_as_array()?;

    array.borrow_mut().push_back(value);

    interpreter.push(array.to_value());
    Ok(())
}

/// Shared body of the two pop words.  Pushes the new array of the remaining values, then the
/// value that was split off.
fn array_pop_op(
    interpreter: &mut dyn Interpreter,
    split: fn(&ValueVec) -> Option<(Value, ValueVecPtr)>,
) -> error::Result<()> {
    let array = interpreter.pop_as_array()?;
    let parts = split(&array.borrow());

    match parts {
        Some((value, rest)) => {
            interpreter.push(rest.to_value());
            interpreter.push(value);

            Ok(())
        }

        None => script_error(
            interpreter,
            ErrorKind::IndexOutOfRange {
                index: 0,
                length: 0,
            },
        ),
    }
}

/// Split off the first value of the array.  The array itself isn't changed.
///
/// Signature: `array -- rest value`
fn word_array_pop_front(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    array_pop_op(interpreter, ValueVec::split_front)
}

/// Split off the last value of the array.  The array itself isn't changed.
///
/// Signature: `array -- rest value`
fn word_array_pop_back(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    array_pop_op(interpreter, ValueVec::split_back)
}

/// Push every value of the array, first to last.
///
/// Signature: `array -- values...`
fn word_array_spill(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let array = interpreter.pop_as_array()?;
    let values = array.borrow().to_vec();

    for value in values {
        interpreter.push(value);
    }

    Ok(())
}

/// Handler for the `/` sigil, index into the array below the literal.
///
/// Signature: `array text -- value`
fn word_sigil_index(interpreter: &mut dyn Interpreter) -> error::Result<()> {
    let text = interpreter.pop_as_string()?;
    let array = interpreter.pop_as_array()?;

    let index = match text.parse::<i64>() {
        Ok(index) => index,
        Err(_) => return script_error(interpreter, ErrorKind::NumericParse(text)),
    };

    let index = check_bounds(interpreter, &array, index)?;
    let value = array.borrow().get(index).unwrap_or_default();

    interpreter.push(value);
    Ok(())
}

/// Register the array words.
pub fn register_array_words(interpreter: &mut dyn Interpreter) {
    add_native_word!(
        interpreter,
        "{",
        word_array_start,
        "Start an array literal.",
        " -- marker"
    );

    add_native_word!(
        interpreter,
        "}",
        word_array_end,
        "Collect the values pushed since the last { into an array.",
        "marker values... -- array"
    );

    add_native_word!(
        interpreter,
        "new-arr",
        word_array_new,
        "Create a new array of absent values.",
        "size -- array"
    );

    add_native_word!(
        interpreter,
        "nth",
        word_array_read_index,
        "Read a value from an array.",
        "array index -- value"
    );

    add_native_word!(
        interpreter,
        "set-nth",
        word_array_write_index,
        "Write a value into an array.",
        "array index value -- array"
    );

    add_native_word!(
        interpreter,
        "push-arr",
        word_array_push_back,
        "Append a value to an array.",
        "array value -- array"
    );

    add_native_word!(
        interpreter,
        "arr-pop-front",
        word_array_pop_front,
        "Split the first value off of an array.",
        "array -- rest value"
    );

    add_native_word!(
        interpreter,
        "arr-pop-back",
        word_array_pop_back,
        "Split the last value off of an array.",
        "array -- rest value"
    );

    add_native_word!(
        interpreter,
        "arr-spill",
        word_array_spill,
        "Push all of an array's values onto the stack.",
        "array -- values..."
    );

    add_native_word!(
        interpreter,
        "sigil:/",
        word_sigil_index,
        "Index literal, read a value from the array below.",
        "array text -- value"
    );
}
