use std::{ collections::HashMap,
           io::BufRead };
use tracing::debug;
use crate::{ lang::{ code::{ Closure,
                             ClosureBody,
                             Instruction,
                             Op },
                     compilation::{ process_token,
                                    sigil_word_name },
                     source_buffer::SourceLocation,
                     tokenizing::{ ReaderSource,
                                   StringSource,
                                   Token,
                                   TokenSource } },
             runtime::{ config::InterpreterConfig,
                        data_structures::{ dictionary::{ Dictionary,
                                                         WordInfo,
                                                         WordType },
                                           value::Value,
                                           value_vec::ValueVecPtr },
                        error::{ self,
                                 script_error,
                                 ErrorKind },
                        interpreter::{ CallItem,
                                       CallStack,
                                       CodeManagement,
                                       Interpreter,
                                       InterpreterStack,
                                       ValueStack,
                                       WordManagement },
                        output::OutputSink,
                        stack_guard::ensure_sufficient_stack } };



/// The variables known by the interpreter.  One flat namespace shared by every word and block.
pub type VariableMap = HashMap<String, Value>;

/// The stack of token sources, the last one is the active source.
pub type SourceStack = Vec<Box<dyn TokenSource>>;



/// The core interpreter implementation for the SkynetRPN language.
pub struct SkynetInterpreter
{
    config: InterpreterConfig,

    /// The data stack used by the interpreter.
    stack: ValueStack,

    /// The auxiliary stack, values get here through `->` and come back through `<-`.
    aux_stack: ValueStack,

    variables: VariableMap,

    /// The dictionary of words known by the interpreter.
    dictionary: Dictionary,

    /// Where tokens are read from.
    sources: SourceStack,

    /// Where `.` and `dbg` send their text.
    output: Box<dyn OutputSink>,


    /// The last known location execution has reached in the original source code.
    current_location: Option<SourceLocation>,

    /// The call stack used to keep track of the current execution context.
    call_stack: CallStack
}


impl Interpreter for SkynetInterpreter
{
    fn config(&self) -> &InterpreterConfig
    {
        &self.config
    }

    fn variable(&self, name: &str) -> Option<&Value>
    {
        self.variables.get(name)
    }

    fn set_variable(&mut self, name: &str, value: Value)
    {
        self.variables.insert(name.to_string(), value);
    }

    fn emit(&mut self, text: &str) -> error::Result<()>
    {
        if let Err(error) = self.output.write_line(text)
        {
            return script_error(self, ErrorKind::Io(error.to_string()));
        }

        Ok(())
    }
}


impl InterpreterStack for SkynetInterpreter
{
    fn stack(&self) -> &ValueStack
    {
        &self.stack
    }

    fn aux_stack(&self) -> &ValueStack
    {
        &self.aux_stack
    }

    fn push(&mut self, value: Value)
    {
        self.stack.push(value);
    }

    fn pop(&mut self) -> error::Result<Value>
    {
        match self.stack.pop()
        {
            Some(value) => Ok(value),
            None => script_error(self, ErrorKind::StackUnderflow("data"))
        }
    }

    fn push_aux(&mut self, value: Value)
    {
        self.aux_stack.push(value);
    }

    fn pop_aux(&mut self) -> error::Result<Value>
    {
        match self.aux_stack.pop()
        {
            Some(value) => Ok(value),
            None => script_error(self, ErrorKind::StackUnderflow("aux"))
        }
    }

    fn pop_as_int(&mut self) -> error::Result<i64>
    {
        let value = self.pop()?;
        value.into_int(self)
    }

    fn pop_as_bool(&mut self) -> error::Result<bool>
    {
        let value = self.pop()?;
        value.into_bool(self)
    }

    fn pop_as_string(&mut self) -> error::Result<String>
    {
        let value = self.pop()?;
        value.into_string(self)
    }

    fn pop_as_array(&mut self) -> error::Result<ValueVecPtr>
    {
        let value = self.pop()?;
        value.into_array(self)
    }

    fn pop_as_closure(&mut self) -> error::Result<Closure>
    {
        let value = self.pop()?;
        value.into_closure(self)
    }
}


impl CodeManagement for SkynetInterpreter
{
    fn next_token(&mut self) -> error::Result<Option<Token>>
    {
        match self.sources.last_mut()
        {
            Some(source) => source.next_token(),
            None => Ok(None)
        }
    }

    fn source_push(&mut self, source: Box<dyn TokenSource>)
    {
        debug!(path = source.path(), depth = self.sources.len() + 1, "token source pushed");
        self.sources.push(source);
    }

    fn source_pop(&mut self)
    {
        if let Some(source) = self.sources.pop()
        {
            debug!(path = source.path(), depth = self.sources.len(), "token source popped");
        }
    }

    fn run(&mut self) -> error::Result<()>
    {
        while let Some(token) = self.next_token()?
        {
            process_token(self, token)?;
        }

        Ok(())
    }

    fn process_source(&mut self, path: &str, source: &str) -> error::Result<()>
    {
        self.process_token_source(Box::new(StringSource::new(path, source)))
    }

    fn execute_instruction(&mut self, instruction: &Instruction) -> error::Result<()>
    {
        self.current_location = Some(instruction.location.clone());

        match &instruction.op
        {
            Op::Execute(name, closure) => self.execute_word(&instruction.location, name, closure),

            Op::SigilLiteral { sigil, handler, text } =>
                {
                    self.push(Value::String(text.clone()));
                    self.execute_word(&instruction.location, &sigil_word_name(*sigil), handler)
                },

            Op::PushClosure(closure) =>
                {
                    self.push(Value::Closure(closure.clone()));
                    Ok(())
                }
        }
    }
}


impl WordManagement for SkynetInterpreter
{
    fn current_location(&self) -> &Option<SourceLocation>
    {
        &self.current_location
    }

    fn set_current_location(&mut self, location: &SourceLocation)
    {
        self.current_location = Some(location.clone());
    }

    fn add_word(&mut self,
                location: SourceLocation,
                name: String,
                closure: Closure,
                description: String,
                signature: String,
                word_type: WordType)
    {
        let word_info = WordInfo
            {
                location: location.clone(),
                name: name.clone(),
                word_type,
                description,
                signature,
                closure
            };

        let previous = self.dictionary.insert(name.clone(), word_info);

        if name.starts_with("sigil:")
        {
            debug!(sigil = %name, location = %location, "sigil installed");
        }
        else if previous.is_some()
        {
            debug!(word = %name, location = %location, "word redefined");
        }
        else
        {
            debug!(word = %name, location = %location, "word defined");
        }
    }

    fn find_word(&self, word: &str) -> Option<&WordInfo>
    {
        self.dictionary.try_get(word)
    }

    fn word_count(&self) -> usize
    {
        self.dictionary.len()
    }

    fn call_closure(&mut self, closure: &Closure) -> error::Result<()>
    {
        ensure_sufficient_stack(|| self.invoke_closure(closure))
    }

    fn execute_word(&mut self,
                    location: &SourceLocation,
                    name: &str,
                    closure: &Closure) -> error::Result<()>
    {
        self.current_location = Some(location.clone());
        self.call_stack.push(CallItem::new(name.to_string(), location.clone()));

        let result = self.call_closure(closure);

        let _ = self.call_stack.pop();

        if result.is_ok()
        {
            self.current_location = Some(location.clone());
        }

        result
    }

    fn execute_word_named(&mut self,
                          location: &SourceLocation,
                          word: &str) -> error::Result<()>
    {
        match self.dictionary.try_get(word)
        {
            Some(word_info) =>
                {
                    let closure = word_info.closure.clone();
                    self.execute_word(location, word, &closure)
                },

            None => script_error(self, ErrorKind::UnknownWord(word.to_string()))
        }
    }

    fn call_stack(&self) -> &CallStack
    {
        &self.call_stack
    }
}


impl SkynetInterpreter
{
    pub fn new(config: InterpreterConfig, output: Box<dyn OutputSink>) -> SkynetInterpreter
    {
        SkynetInterpreter
            {
                config,

                stack: Vec::with_capacity(20),
                aux_stack: Vec::new(),

                variables: VariableMap::new(),

                dictionary: Dictionary::new(),

                sources: SourceStack::new(),
                output,

                current_location: None,
                call_stack: CallStack::with_capacity(40)
            }
    }

    /// Evaluate everything a reader produces.  Lines are read as they are needed, so an
    /// interactive stream runs as it's typed.
    pub fn process_reader<R: BufRead + 'static>(&mut self, path: &str, reader: R)
        -> error::Result<()>
    {
        self.process_token_source(Box::new(ReaderSource::new(path, reader)))
    }

    fn invoke_closure(&mut self, closure: &Closure) -> error::Result<()>
    {
        // Curried closures push their captured values from the outermost in, then the closure at
        // the end of the chain runs.
        let mut current = closure.clone();

        loop
        {
            let next = match current.body()
            {
                ClosureBody::Native(info) =>
                    {
                        let handler = info.handler();
                        return (*handler)(self);
                    },

                ClosureBody::Block(code) =>
                    {
                        for instruction in code.iter()
                        {
                            self.execute_instruction(instruction)?;
                        }

                        return Ok(());
                    },

                ClosureBody::Curried { captured, inner } =>
                    {
                        self.push(captured.clone());
                        inner.clone()
                    }
            };

            current = next;
        }
    }
}


impl Default for SkynetInterpreter
{
    fn default() -> Self
    {
        Self::new(InterpreterConfig::default(), Box::new(crate::runtime::output::StdoutSink))
    }
}
