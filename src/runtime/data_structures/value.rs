use std::{ collections::HashSet,
           fmt::{ self,
                  Display,
                  Formatter },
           rc::Rc };
use crate::{ lang::code::Closure,
             runtime::{ data_structures::value_vec::{ format_array,
                                                       ValueVec,
                                                       ValueVecPtr },
                        error::{ self,
                                 type_mismatch },
                        interpreter::Interpreter,
                        stack_guard::ensure_sufficient_stack } };



/// Core value enumeration used by the interpreter.  Everything that can sit on a stack, in a
/// variable or in an array is one of these.
#[derive(Clone, Default)]
pub enum Value
{
    /// The absent value.  Fresh array slots hold it, as does any variable read before it's
    /// written.
    #[default]
    None,

    /// We have an integer value.  Represented as an i64.
    Int(i64),

    /// A boolean value.
    Bool(bool),

    /// A string value, represented by a Rust string.
    String(String),

    /// An array of Values.  Handled by reference with a ValueVecPtr, never copied implicitly.
    Vec(ValueVecPtr),

    /// A callable block, word reference or curried closure.
    Closure(Closure),

    /// Pushed by `{` to mark where an array literal starts, consumed again by `}`.
    Marker
}


/// Deep equality.  Integers, booleans and strings compare by value, arrays compare element by
/// element and closures compare by identity.  Values of different variants are never equal.
impl PartialEq for Value
{
    fn eq(&self, other: &Value) -> bool
    {
        values_equal(self, other, &mut ComparedArrays::new())
    }
}


/// Arrays being compared, pairs already on the list are assumed equal so arrays that contain
/// themselves don't recurse forever.
type ComparedArrays = HashSet<( *const (), *const () )>;


fn values_equal(a: &Value, b: &Value, compared: &mut ComparedArrays) -> bool
{
    match ( a, b )
    {
        ( Value::None,       Value::None       ) => true,
        ( Value::Marker,     Value::Marker     ) => true,
        ( Value::Int(a),     Value::Int(b)     ) => a == b,
        ( Value::Bool(a),    Value::Bool(b)    ) => a == b,
        ( Value::String(a),  Value::String(b)  ) => a == b,
        ( Value::Closure(a), Value::Closure(b) ) => Closure::ptr_eq(a, b),

        ( Value::Vec(a), Value::Vec(b) ) =>
            {
                if Rc::ptr_eq(a, b)
                {
                    return true;
                }

                let pair = ( Rc::as_ptr(a) as *const (), Rc::as_ptr(b) as *const () );

                if !compared.insert(pair)
                {
                    return true;
                }

                let a = a.borrow();
                let b = b.borrow();

                a.len() == b.len()
                    && ensure_sufficient_stack(||
                        {
                            a.iter().zip(b.iter()).all(|( a, b )| values_equal(a, b, compared))
                        })
            },

        _ => false
    }
}


impl fmt::Debug for Value
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            Value::String(value) => write!(f, "{:?}", value),
            _                    => write!(f, "{}", self)
        }
    }
}


/// Print the value the way the `.` word shows it.
impl Display for Value
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self
        {
            Value::None           => write!(f, "<nil>"),
            Value::Int(value)     => write!(f, "{}", value),
            Value::Bool(value)    => write!(f, "{}", value),
            Value::String(value)  => write!(f, "{}", value),
            Value::Vec(value)     => format_array(f, value),
            Value::Closure(value) => write!(f, "{}", value),
            Value::Marker         => write!(f, "{{}}")
        }
    }
}


/// Convert a raw data type into a Value.
pub trait ToValue
{
    fn to_value(&self) -> Value;
}


/// Define conversions between Values and the raw data types they hold.
macro_rules! value_conversion
{
    ($data_type:ty , $variant:ident , $into_ident:ident , $kind:literal) =>
    {
        impl Value
        {
            #[doc = concat!("Take the ", $kind, " out of the value, or fail with a type mismatch.")]
            pub fn $into_ident(self, interpreter: &dyn Interpreter) -> error::Result<$data_type>
            {
                match self
                {
                    Value::$variant(value) => Ok(value),
                    other => type_mismatch(interpreter, $kind, other.type_name())
                }
            }
        }


        #[doc = concat!("Support converting from a ", stringify!($data_type), " to a Value.")]
        impl From<$data_type> for Value
        {
            fn from(original: $data_type) -> Value
            {
                Value::$variant(original)
            }
        }


        impl ToValue for $data_type
        {
            fn to_value(&self) -> Value
            {
                Value::$variant(self.clone())
            }
        }
    };
}


value_conversion!(i64,         Int,     into_int,     "integer");
value_conversion!(bool,        Bool,    into_bool,    "boolean");
value_conversion!(String,      String,  into_string,  "string");
value_conversion!(ValueVecPtr, Vec,     into_array,   "array");
value_conversion!(Closure,     Closure, into_closure, "closure");


impl From<&str> for Value
{
    fn from(original: &str) -> Value
    {
        Value::String(original.to_string())
    }
}


impl ToValue for &str
{
    fn to_value(&self) -> Value
    {
        Value::String(self.to_string())
    }
}


impl From<Vec<Value>> for Value
{
    fn from(values: Vec<Value>) -> Value
    {
        Value::Vec(ValueVec::from_vec(values))
    }
}


impl Value
{
    /// The name of the value's kind, as used in type mismatch errors.
    pub fn type_name(&self) -> &'static str
    {
        match self
        {
            Value::None       => "absent",
            Value::Int(_)     => "integer",
            Value::Bool(_)    => "boolean",
            Value::String(_)  => "string",
            Value::Vec(_)     => "array",
            Value::Closure(_) => "closure",
            Value::Marker     => "marker"
        }
    }

    /// Check if the value is the absent value.
    pub fn is_none(&self) -> bool
    {
        matches!(self, Value::None)
    }

    pub fn is_marker(&self) -> bool
    {
        matches!(self, Value::Marker)
    }
}
