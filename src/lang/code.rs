use crate::{ lang::source_buffer::SourceLocation,
             runtime::{ data_structures::value::Value,
                        interpreter::WordHandlerInfo,
                        stack_guard::ensure_sufficient_stack } };
use std::{ fmt::{ self,
                  Display,
                  Formatter },
           mem,
           rc::Rc };



/// The operations a compiled block is made of.  Everything an operation refers to is resolved when
/// the block is compiled, redefining a word afterwards does not change blocks already built.
#[derive(Clone)]
pub enum Op
{
    /// Run a word.  The name is kept for call stacks and printing.
    Execute(String, Closure),

    /// Push the text that followed the sigil character as a string, then run the sigil's handler
    /// to turn it into the actual literal.
    SigilLiteral
    {
        sigil: char,
        handler: Closure,
        text: String
    },

    /// Push a closure compiled from a nested block.
    PushClosure(Closure)
}


/// A single operation along with the location of the token it was compiled from.
#[derive(Clone)]
pub struct Instruction
{
    pub location: SourceLocation,
    pub op: Op
}


/// A block of compiled instructions.
pub type ByteCode = Vec<Instruction>;


impl Instruction
{
    pub fn new(location: SourceLocation, op: Op) -> Instruction
    {
        Instruction { location, op }
    }
}


/// Print the instruction the way it was written in the source.
impl Display for Instruction
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match &self.op
        {
            Op::Execute(name, _)                   => write!(f, "{}", name),
            Op::SigilLiteral { sigil, text, .. } => write!(f, "{}{}", sigil, text),
            Op::PushClosure(closure)               => write!(f, "{}", closure)
        }
    }
}



/// What a closure does when it's called.
pub enum ClosureBody
{
    /// A word implemented in Rust.
    Native(WordHandlerInfo),

    /// A block compiled from `[ ... ]`.
    Block(ByteCode),

    /// Push the captured value, then call the inner closure.  Built by `curry`.
    Curried
    {
        captured: Value,
        inner: Closure
    }
}


thread_local!
{
    /// Stands in for the inner closure of a curried body while a chain is being torn down.
    static DETACHED: Closure = Closure::block(ByteCode::new());
}


/// Curried closures form a chain through `inner`.  Unlink the chain one body at a time so a long
/// chain doesn't recurse once per link when it's dropped.
impl Drop for ClosureBody
{
    fn drop(&mut self)
    {
        let ClosureBody::Curried { inner, .. } = self else { return };
        let Ok(detached) = DETACHED.try_with(Closure::clone) else { return };

        let mut next = mem::replace(inner, detached.clone());

        while let Ok(mut body) = Rc::try_unwrap(next.0)
        {
            match &mut body
            {
                ClosureBody::Curried { inner, .. } => next = mem::replace(inner, detached.clone()),
                _ => break
            }
        }
    }
}


/// An immutable, shareable callable.  Cloning a closure only clones the reference, the same
/// closure can sit on a stack, in a variable and inside an array at the same time.
#[derive(Clone)]
pub struct Closure(Rc<ClosureBody>);


impl Closure
{
    pub fn native(info: WordHandlerInfo) -> Closure
    {
        Closure(Rc::new(ClosureBody::Native(info)))
    }

    pub fn block(code: ByteCode) -> Closure
    {
        Closure(Rc::new(ClosureBody::Block(code)))
    }

    pub fn curried(captured: Value, inner: Closure) -> Closure
    {
        Closure(Rc::new(ClosureBody::Curried { captured, inner }))
    }

    pub fn body(&self) -> &ClosureBody
    {
        &self.0
    }

    /// Closures compare by identity.
    pub fn ptr_eq(a: &Closure, b: &Closure) -> bool
    {
        Rc::ptr_eq(&a.0, &b.0)
    }
}


impl Display for Closure
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        match self.body()
        {
            ClosureBody::Native(info) => write!(f, "&{}", info.name()),

            ClosureBody::Block(code) =>
                {
                    write!(f, "[ ")?;

                    for instruction in code.iter()
                    {
                        write!(f, "{} ", instruction)?;
                    }

                    write!(f, "]")
                },

            ClosureBody::Curried { captured, inner } =>
                ensure_sufficient_stack(|| write!(f, "{} {} curry", captured, inner))
        }
    }
}
