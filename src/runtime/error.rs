use std::{ error::Error,
           process::{ ExitCode,
                      Termination },
           fmt::{ self, Debug, Display, Formatter } };
use thiserror::Error;
use crate::{ runtime::interpreter::CallStack,
             lang::source_buffer::SourceLocation };

use super::interpreter::Interpreter;



pub type Result<T> = std::result::Result<T, ScriptError>;



/// Every way evaluation can fail.  All of them are fatal to the evaluation they occur in.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorKind
{
    /// A token, or the name given to the `&` sigil, is not in the word table.
    #[error("Unknown word: {0}")]
    UnknownWord(String),

    /// A popped value is not of the kind the word needs.
    #[error("Expected {expected} value, found {found}.")]
    TypeMismatch
    {
        expected: &'static str,
        found: &'static str
    },

    /// A pop from an empty stack.  Names the stack, data or aux.
    #[error("Stack underflow on the {0} stack.")]
    StackUnderflow(&'static str),

    /// The text given to an integer or index sigil is not a valid integer.
    #[error("Bad number: {0:?}")]
    NumericParse(String),

    #[error("Index {index} is out of bounds for array of size {length}.")]
    IndexOutOfRange
    {
        index: i64,
        length: usize
    },

    /// The source ran out before a `[` found its matching `]`.
    #[error("Unterminated block, the source ended before the closing ].")]
    UnterminatedLambda,

    #[error("Division by zero.")]
    DivisionByZero,

    /// Reading a variable that was never written, when strict variables are enabled.
    #[error("Variable {0} is not defined.")]
    UndefinedVariable(String),

    /// Reading the token source or writing to the output sink failed.
    #[error("I/O error: {0}")]
    Io(String)
}



/// Any error that occurs during the execution of a script.
#[derive(Clone)]
pub struct ScriptError
{
    /// The location in the source code the error occurred, if available.
    location: Option<SourceLocation>,

    /// What went wrong.
    kind: ErrorKind,

    /// The script's call stack at the time of the error, if available.
    call_stack: Option<CallStack>
}


impl Error for ScriptError
{
    fn source(&self) -> Option<&(dyn Error + 'static)>
    {
        Some(&self.kind)
    }
}


/// When returned from main, convert the error result to an operating system exit code.
impl Termination for ScriptError
{
    /// Because this type represents an error, the exit code is always FAILURE.
    fn report(self) -> ExitCode
    {
        eprintln!("Error: {}", self);
        ExitCode::FAILURE
    }
}


/// Pretty print the error along with where it happened and the words that were running.
impl Display for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match &self.location
        {
            Some(location) => write!(f, "{}: {}", location, self.kind)?,
            None => write!(f, "{}", self.kind)?
        }

        if let Some(call_stack) = &self.call_stack
        {
            if !call_stack.is_empty()
            {
                write!(f, "\n\nCall stack\n")?;

                for item in call_stack.iter().rev()
                {
                    writeln!(f, "  {}", item)?;
                }
            }
        }

        Ok(())
    }
}


impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}


impl ScriptError
{
    pub fn new(location: Option<SourceLocation>,
               kind: ErrorKind,
               call_stack: Option<CallStack>) -> ScriptError
    {
        ScriptError
            {
                location,
                kind,
                call_stack
            }
    }

    /// Create a new ScriptError and wrap it in a Result::Err.
    pub fn new_as_result<T>(location: Option<SourceLocation>,
                            kind: ErrorKind,
                            call_stack: Option<CallStack>) -> Result<T>
    {
        Err(ScriptError::new(location, kind, call_stack))
    }

    /// If available, the location in the source code the error occurred.
    pub fn location(&self) -> &Option<SourceLocation>
    {
        &self.location
    }

    pub fn kind(&self) -> &ErrorKind
    {
        &self.kind
    }

    /// If available, the script's call stack at the time of the error.
    pub fn call_stack(&self) -> &Option<CallStack>
    {
        &self.call_stack
    }
}


impl From<std::io::Error> for ScriptError
{
    fn from(error: std::io::Error) -> ScriptError
    {
        ScriptError::new(None, ErrorKind::Io(error.to_string()), None)
    }
}



/// Create a ScriptError at the interpreter's current location and call stack and wrap it in a
/// Result::Err.
pub fn script_error<T>(interpreter: &dyn Interpreter, kind: ErrorKind) -> Result<T>
{
    let location = interpreter.current_location().clone();
    let call_stack = interpreter.call_stack().clone();

    ScriptError::new_as_result(location, kind, Some(call_stack))
}


/// Shorthand for a type mismatch error.
pub fn type_mismatch<T>(interpreter: &dyn Interpreter,
                        expected: &'static str,
                        found: &'static str) -> Result<T>
{
    script_error(interpreter, ErrorKind::TypeMismatch { expected, found })
}
