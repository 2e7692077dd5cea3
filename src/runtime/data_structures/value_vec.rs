use crate::runtime::{data_structures::value::Value, stack_guard::ensure_sufficient_stack};
use std::{
    cell::RefCell,
    collections::HashSet,
    fmt::{self, Display, Formatter},
    rc::Rc,
};

/// An array of interpreter values.
#[derive(Clone, Default)]
pub struct ValueVec {
    values: Vec<Value>,
}

/// A pointer to the ValueVec used to manage this object by reference.  Every stack slot, variable
/// or array slot holding the pointer sees the same storage.
pub type ValueVecPtr = Rc<RefCell<ValueVec>>;

thread_local! {
    /// Arrays currently being printed.  An array reachable from itself is printed as `[...]` the
    /// second time it's reached.
    static ARRAYS_BEING_FORMATTED: RefCell<HashSet<*const RefCell<ValueVec>>> =
        RefCell::new(HashSet::new());
}

/// Print an array as `[a b c]`.
pub fn format_array(f: &mut Formatter, array: &ValueVecPtr) -> fmt::Result {
    let pointer = Rc::as_ptr(array);
    let first_visit = ARRAYS_BEING_FORMATTED.with(|arrays| arrays.borrow_mut().insert(pointer));

    if !first_visit {
        return write!(f, "[...]");
    }

    let result = ensure_sufficient_stack(|| write!(f, "{}", array.borrow()));
    ARRAYS_BEING_FORMATTED.with(|arrays| arrays.borrow_mut().remove(&pointer));

    result
}

/// Print the values separated by spaces within brackets.
impl Display for ValueVec {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "[")?;

        for (index, value) in self.values.iter().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }

            write!(f, "{}", value)?;
        }

        write!(f, "]")
    }
}

/// Arrays nested inside arrays are unlinked onto a work list rather than dropped recursively, so
/// dropping a deeply nested array doesn't recurse once per level.
impl Drop for ValueVec {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.values);

        while let Some(value) = pending.pop() {
            if let Value::Vec(array) = value {
                if let Ok(cell) = Rc::try_unwrap(array) {
                    pending.append(&mut cell.into_inner().values);
                }
            }
        }
    }
}

/// Core functionality for the ValueVec type.
impl ValueVec {
    /// Create a new reference to a ValueVec with a given size, filled with absent values.
    pub fn new(new_size: usize) -> ValueVecPtr {
        Rc::new(RefCell::new(ValueVec {
            values: vec![Value::None; new_size],
        }))
    }

    /// Create a new reference to a ValueVec with a given vector of values.
    pub fn from_vec(values: Vec<Value>) -> ValueVecPtr {
        Rc::new(RefCell::new(ValueVec { values }))
    }

    /// Make sure users of the ValueVec can iterate it's values.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// How big is the ValueVec?
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the ValueVec is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a copy of the value at the index, if the index is in range.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.values.get(index).cloned()
    }

    /// Overwrite the value at an index.  Returns false if the index is out of range.
    pub fn set(&mut self, index: usize, value: Value) -> bool {
        match self.values.get_mut(index) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Push a new value onto the back of the ValueVec.
    pub fn push_back(&mut self, value: Value) {
        self.values.push(value);
    }

    /// Split off the front value, returning it along with a new array of the values after it.  The
    /// ValueVec itself is left untouched.
    pub fn split_front(&self) -> Option<(Value, ValueVecPtr)> {
        let (front, rest) = self.values.split_first()?;
        Some((front.clone(), ValueVec::from_vec(rest.to_vec())))
    }

    /// Split off the back value, returning it along with a new array of the values before it.  The
    /// ValueVec itself is left untouched.
    pub fn split_back(&self) -> Option<(Value, ValueVecPtr)> {
        let (back, rest) = self.values.split_last()?;
        Some((back.clone(), ValueVec::from_vec(rest.to_vec())))
    }

    /// Copy out the values, the values themselves are shared not cloned deeply.
    pub fn to_vec(&self) -> Vec<Value> {
        self.values.clone()
    }
}
