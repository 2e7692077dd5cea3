use crate::{
    lang::{
        code::{Closure, Instruction},
        source_buffer::SourceLocation,
        tokenizing::{Token, TokenSource},
    },
    runtime::{
        config::InterpreterConfig,
        data_structures::{
            dictionary::{WordInfo, WordType},
            value::Value,
            value_vec::ValueVecPtr,
        },
        error,
    },
};
use std::{
    fmt::{self, Display, Formatter},
    rc::Rc,
};

pub mod skynet_interpreter;

/// A call stack item is a record of the executing word's name and the location within the original
/// source code from which it was found.  These items are read-only and the fields are accessed by
/// member functions.
#[derive(Clone)]
pub struct CallItem {
    location: SourceLocation,
    word: String,
}

impl CallItem {
    /// Create a new call stack item.
    pub fn new(word: String, location: SourceLocation) -> CallItem {
        CallItem { location, word }
    }

    /// Where in the source code was the execution of this word found?
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    // The name of the word being executed.
    pub fn word(&self) -> &String {
        &self.word
    }
}

/// Make sure that this word can be nicely displayed to the user in event of an error.
impl Display for CallItem {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.word)
    }
}

/// Type to represent a call stack.  This is a stack of call items currently being executed by the
/// interpreter.  This is used to help track errors and provide a script's stack trace to the user.
pub type CallStack = Vec<CallItem>;

/// The data and aux stacks of values managed by the interpreter.
pub type ValueStack = Vec<Value>;

/// Trait for managing the interpreter's data and aux stacks.  Intended to be called by native
/// words.
pub trait InterpreterStack {
    /// Use to examine the full data stack when required.  The `dbg` word prints it.
    fn stack(&self) -> &ValueStack;

    /// The auxiliary stack, only reachable from scripts through `->` and `<-`.
    fn aux_stack(&self) -> &ValueStack;

    /// Push a script value onto the stack.  This is the primary way of sending values to words.
    fn push(&mut self, value: Value);

    /// Pop a value from the stack.  This is the primary way of receiving outputs from words.  If
    /// the stack is empty a stack underflow error is returned.
    fn pop(&mut self) -> error::Result<Value>;

    fn push_aux(&mut self, value: Value);

    /// Pop a value from the aux stack, failing with a stack underflow when it's empty.
    fn pop_aux(&mut self) -> error::Result<Value>;

    /// Pop the top value and require it to be an integer.  We fail with a type mismatch if it
    /// isn't, or with a stack underflow if the stack is empty.
    fn pop_as_int(&mut self) -> error::Result<i64>;

    /// Pop the top value and require it to be a boolean.
    fn pop_as_bool(&mut self) -> error::Result<bool>;

    /// Pop the top value and require it to be a string.
    fn pop_as_string(&mut self) -> error::Result<String>;

    /// Pop the top value and require it to be an array.  The array is returned by reference, any
    /// changes made through it are seen by everyone else holding it.
    fn pop_as_array(&mut self) -> error::Result<ValueVecPtr>;

    /// Pop the top value and require it to be a closure.
    fn pop_as_closure(&mut self) -> error::Result<Closure>;
}

/// Trait for managing the stack of token sources and for running the code read from them.
pub trait CodeManagement {
    /// Get the next token from the active token source.  None is returned once that source is
    /// exhausted, or if there is no active source at all.
    fn next_token(&mut self) -> error::Result<Option<Token>>;

    /// Make a new token source the active one.  The previous source is suspended until this one
    /// is popped.
    fn source_push(&mut self, source: Box<dyn TokenSource>);

    /// Drop the active token source, restoring the one that was active before it.
    fn source_pop(&mut self);

    /// Process every remaining token of the active source, stopping at the first error.
    fn run(&mut self) -> error::Result<()>;

    /// Push the token source, run it to exhaustion and pop it again.  The source is popped even
    /// when evaluation fails.
    fn process_token_source(&mut self, source: Box<dyn TokenSource>) -> error::Result<()> {
        self.source_push(source);

        let result = self.run();

        self.source_pop();
        result
    }

    /// Evaluate an in memory source string.
    ///
    /// The path parameter is used to represent the source code in locations and error reporting.
    /// For example, the bootstrap program is run with a path of "\<bootstrap\>".
    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()>;

    /// Execute a single compiled instruction.
    fn execute_instruction(&mut self, instruction: &Instruction) -> error::Result<()>;
}

/// Definition of a word handler function.  This is the function that is called when a native word
/// is to be executed.  Can be a lambda, a callable object or a Rust function.
pub type WordHandler = dyn Fn(&mut dyn Interpreter) -> error::Result<()>;

/// Information about a native word handler.  Once created it's fields are read-only and accessed
/// by member methods.
#[derive(Clone)]
pub struct WordHandlerInfo {
    name: String,
    handler: Rc<WordHandler>,
}

/// Core implementation of WordHandlerInfo's methods.
impl WordHandlerInfo {
    /// Create a new WordHandlerInfo instance.
    pub fn new(name: String, handler: Rc<WordHandler>) -> WordHandlerInfo {
        WordHandlerInfo { name, handler }
    }

    /// The name of the word itself.
    pub fn name(&self) -> &String {
        &self.name
    }

    /// The handler function for the word.
    pub fn handler(&self) -> Rc<WordHandler> {
        self.handler.clone()
    }
}

/// Simplify registering a native word with the interpreter.
///
/// Required parameters are, the interpreter instance to register with.  The name of the word to
/// register.  The word function handler to execute for the word.  A simple description of the word.
/// As well as the word's stack signature.
#[macro_export]
macro_rules! add_native_word {
    (
        $interpreter:expr ,
        $name:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        // Import the necessary items for the macro to work.
        use std::rc::Rc;
        use $crate::lang::{code::Closure, source_buffer::SourceLocation};
        use $crate::runtime::{
            data_structures::dictionary::WordType, interpreter::WordHandlerInfo,
        };

        // Record where in the Rust source code the word was registered from.
        let location = SourceLocation::new_from_info(file!(), line!() as usize, column!() as usize);
        let name: String = $name.to_string();

        let closure = Closure::native(WordHandlerInfo::new(name.clone(), Rc::new($function)));

        $interpreter.add_word(
            location,
            name,
            closure,
            $description.to_string(), // Word description.
            $signature.to_string(),   // Word signature.
            WordType::Native,
        );
    }};
}

/// Trait for managing and executing words known to the interpreter.
pub trait WordManagement {
    /// If currently set, this represents the current executing location in the original source
    /// code.
    fn current_location(&self) -> &Option<SourceLocation>;

    /// Update the current location, errors raised from here on report it.
    fn set_current_location(&mut self, location: &SourceLocation);

    /// Add a new word to the interpreter's dictionary, replacing any word of the same name.  This
    /// can be a native word or a scripted word.
    fn add_word(
        &mut self,
        location: SourceLocation,
        name: String,
        closure: Closure,
        description: String,
        signature: String,
        word_type: WordType,
    );

    /// Find a word in the interpreter's dictionary by name.
    fn find_word(&self, word: &str) -> Option<&WordInfo>;

    /// How many words are currently defined.
    fn word_count(&self) -> usize;

    /// Run a closure without recording it on the call stack.  This is how the combinators run the
    /// closures they're given.
    fn call_closure(&mut self, closure: &Closure) -> error::Result<()>;

    /// Run a closure as the named word.  The word is recorded on the call stack along with the
    /// location it was invoked from.
    fn execute_word(
        &mut self,
        location: &SourceLocation,
        name: &str,
        closure: &Closure,
    ) -> error::Result<()>;

    /// Find and execute a word by name.  Supply a source location to represent where the word was
    /// executed from.  Use the macro `location_here!()` to get the current location in the Rust
    /// source code if the word is executed from native code.
    ///
    /// If the word is not found an unknown word error is returned.
    fn execute_word_named(&mut self, location: &SourceLocation, word: &str) -> error::Result<()>;

    /// The current script execution call stack.
    fn call_stack(&self) -> &CallStack;
}

/// Core interpreter trait.
///
/// This trait brings together the traits that define the core functionality of the interpreter.
/// Managing the data and aux stacks, the token sources and the words, along with the variables,
/// the configuration and where printed output goes.
pub trait Interpreter: InterpreterStack + CodeManagement + WordManagement {
    /// The settings the interpreter was created with.
    fn config(&self) -> &InterpreterConfig;

    /// Read a variable, None if it was never written.
    fn variable(&self, name: &str) -> Option<&Value>;

    /// Write a variable, creating it if needed.  Variables are global and live as long as the
    /// interpreter.
    fn set_variable(&mut self, name: &str, value: Value);

    /// Send a line of text to the output sink.
    fn emit(&mut self, text: &str) -> error::Result<()>;
}
