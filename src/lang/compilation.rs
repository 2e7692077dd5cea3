use crate::{ lang::{ code::{ ByteCode,
                             Closure,
                             Instruction,
                             Op },
                     tokenizing::Token },
             runtime::{ data_structures::value::Value,
                        error::{ self,
                                 script_error,
                                 ErrorKind },
                        interpreter::Interpreter,
                        stack_guard::ensure_sufficient_stack } };
use tracing::trace;



/// Opens a bracketed block.
pub const BLOCK_START: &str = "[";

/// Closes a bracketed block.
pub const BLOCK_END: &str = "]";



/// The name of the word that handles literals starting with the given sigil character.
pub fn sigil_word_name(sigil: char) -> String
{
    format!("sigil:{}", sigil)
}


/// Resolve a token into an operation.  A token whose first character has a `sigil:` word is a
/// literal for that sigil, any other token must name a word.  A token made of only a sigil
/// character that is also a word's name, `/` for example, runs that word.
pub fn resolve_token(interpreter: &mut dyn Interpreter, token: &Token) -> error::Result<Op>
{
    interpreter.set_current_location(token.location());

    if let Some(sigil) = token.sigil()
    {
        let shadowed = token.is_bare_sigil() && interpreter.find_word(token.text()).is_some();

        if !shadowed
        {
            if let Some(word) = interpreter.find_word(&sigil_word_name(sigil))
            {
                return Ok(Op::SigilLiteral
                    {
                        sigil,
                        handler: word.closure.clone(),
                        text: token.remainder().to_string()
                    });
            }
        }
    }

    match interpreter.find_word(token.text())
    {
        Some(word) => Ok(Op::Execute(token.text().to_string(), word.closure.clone())),
        None       => script_error(interpreter, ErrorKind::UnknownWord(token.text().to_string()))
    }
}


/// Compile the tokens following an opening bracket up to its matching closing bracket.  Nested
/// blocks are compiled recursively and become a single instruction pushing the inner closure.
pub fn compile_block(interpreter: &mut dyn Interpreter, opening: &Token) -> error::Result<Closure>
{
    ensure_sufficient_stack(||
        {
            let mut code = ByteCode::new();

            loop
            {
                let token = match interpreter.next_token()?
                    {
                        Some(token) => token,
                        None =>
                            {
                                interpreter.set_current_location(opening.location());
                                return script_error(interpreter, ErrorKind::UnterminatedLambda);
                            }
                    };

                let op = match token.text()
                    {
                        BLOCK_END   => break,
                        BLOCK_START => Op::PushClosure(compile_block(interpreter, &token)?),
                        _           => resolve_token(interpreter, &token)?
                    };

                code.push(Instruction::new(token.location().clone(), op));
            }

            trace!(location = %opening.location(), instructions = code.len(), "compiled block");

            Ok(Closure::block(code))
        })
}


/// Handle one token read at the top level.  A block is compiled and left on the stack, anything
/// else is resolved and run immediately.
pub fn process_token(interpreter: &mut dyn Interpreter, token: Token) -> error::Result<()>
{
    trace!(token = %token, location = %token.location(), "dispatch");

    if token.text() == BLOCK_START
    {
        let closure = compile_block(interpreter, &token)?;

        interpreter.push(Value::Closure(closure));
        return Ok(());
    }

    let op = resolve_token(interpreter, &token)?;

    interpreter.execute_instruction(&Instruction::new(token.location().clone(), op))
}
