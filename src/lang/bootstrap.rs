use crate::runtime::{ error,
                      interpreter::Interpreter };
use tracing::info;



/// Run once before any user code.  Extends the language with comments, a few aux stack helpers,
/// algebraic data type constructors and the `match`/`||` pattern matching combinators, all built
/// out of the native words.
///
/// `adt` takes a type name and an array of `{ 'variant #arity }` pairs.  For every pair it curries
/// the variant name and arity onto a shared constructor body and defines the result under the
/// variant name.  The constructor pops `arity` values and pushes `[ variant field1 ... fieldN ]`
/// with the deepest value as the first field.
///
/// `match` stores the tagged array being matched.  `||` pops a closure and a tag, and when the tag
/// equals the front of the matched array spills the remaining fields and calls the closure.
pub const BOOTSTRAP: &str = r#"
'sigil:( [ pop ] def
'c-> [ dup -> ] def
'<-c [ <- dup -> ] def
'<>swap [ <- <- swap -> -> ] def

'adt [
    [
        dup /0 !name
        /1 !size

        @name @size [
            !size !name

            @size #1 + new-arr
            #0 @name set-nth !arr

            @size #1 - [
                @size swap - !index
                !value

                @arr @index @value set-nth pop
            ] 0-through

            @arr
        ] curry curry

        @name swap def
    ] for-each
    pop
]
def

'match [
    !currently-matching
] def

'||
[
    !closure !tag

    @currently-matching
    arr-pop-front @tag eq?

    (iftrue)
        [ arr-spill @closure call ]
    (iffalse)
        [ pop ]

    choose
]
def

'possibly {
    { 'is #0 }
    { 'isn't #0 }
} adt
"#;


/// The greeting printed once the bootstrap has run.
pub const BANNER: &str = "'Willkommen_bei_SkynetRPN! .";



/// Run the bootstrap program over its own string source, then print the banner if the
/// configuration asks for it.  The previously active source, if any, is restored afterwards.
pub fn run_bootstrap(interpreter: &mut dyn Interpreter) -> error::Result<()>
{
    interpreter.process_source("<bootstrap>", BOOTSTRAP)?;

    info!(words = interpreter.word_count(), "bootstrap complete");

    if interpreter.config().banner
    {
        interpreter.process_source("<banner>", BANNER)?;
    }

    Ok(())
}
