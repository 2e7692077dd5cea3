// Parameterized word tests using test-case.  Each case runs a snippet on a fresh interpreter and
// checks the resulting data stack, or the kind of error it fails with.

use skynet::lang::bootstrap::run_bootstrap;
use skynet::runtime::built_ins::{base_words::register_base_words, io_words::register_io_words};
use skynet::runtime::config::InterpreterConfig;
use skynet::runtime::data_structures::value::Value;
use skynet::runtime::error::{ErrorKind, Result};
use skynet::runtime::interpreter::skynet_interpreter::SkynetInterpreter;
use skynet::runtime::interpreter::{CodeManagement, InterpreterStack};
use skynet::runtime::output::CapturedOutput;
use test_case::test_case;

fn eval_and_stack(source: &str) -> Result<Vec<Value>> {
    let config = InterpreterConfig {
        banner: false,
        ..InterpreterConfig::default()
    };

    let mut interp = SkynetInterpreter::new(config, Box::new(CapturedOutput::new()));

    register_base_words(&mut interp);
    register_io_words(&mut interp);
    run_bootstrap(&mut interp)?;

    interp.process_source("<test>", source)?;
    Ok(interp.stack().clone())
}

fn eval_ints(source: &str) -> Vec<i64> {
    eval_and_stack(source)
        .unwrap()
        .into_iter()
        .map(|value| match value {
            Value::Int(value) => value,
            other => panic!("expected an integer, found {:?}", other),
        })
        .collect()
}

#[test_case("#0", &[0]; "zero")]
#[test_case("#42", &[42]; "number")]
#[test_case("#-42", &[-42]; "negative number")]
#[test_case("#+7", &[7]; "explicit sign")]
#[test_case("#2 #2 +", &[4]; "simple add")]
#[test_case("#5 #2 -", &[3]; "subtract uses second as left")]
#[test_case("#3 #4 *", &[12]; "simple mul")]
#[test_case("#7 #2 /", &[3]; "simple div")]
#[test_case("#-7 #2 /", &[-3]; "div truncates toward zero")]
#[test_case("#7 #2 %", &[1]; "simple mod")]
#[test_case("#-7 #2 %", &[-1]; "mod takes sign of dividend")]
#[test_case("#6 #3 ^", &[5]; "xor")]
#[test_case("#9223372036854775807 #1 +", &[i64::MIN]; "add wraps")]
#[test_case("#-9223372036854775808 #-1 /", &[i64::MIN]; "div wraps")]
#[test_case("#-9223372036854775808 #-1 %", &[0]; "mod wraps")]
#[test_case("#1 #2 swap", &[2, 1]; "swap")]
#[test_case("#1 dup", &[1, 1]; "dup")]
#[test_case("#1 #2 pop", &[1]; "pop")]
#[test_case("#1 -> #2 <-", &[2, 1]; "aux round trip")]
#[test_case("#3 { #1 #2 } arr-spill", &[3, 1, 2]; "spill")]
#[test_case("{ #1 #2 } #3 push-arr arr-spill", &[1, 2, 3]; "push arr")]
#[test_case("{ } !a @a #1 push-arr pop @a arr-spill", &[1]; "push arr grows shared storage")]
#[test_case("{ #5 #6 #7 } #1 nth", &[6]; "nth")]
#[test_case("{ #5 #6 #7 } /2", &[7]; "index sigil")]
#[test_case("#2 [ #10 * ] call", &[20]; "call")]
#[test_case("#5 [ #1 + ] curry call", &[6]; "curry")]
#[test_case("#0 #2 [ + ] 0-through", &[3]; "sum with zero through")]
#[test_case("#1 { #1 #2 #3 } [ + ] for-each", &[7]; "sum with for each")]
#[test_case("'sq [ dup * ] def #7 sq", &[49]; "def")]
fn int_results(source: &str, expected: &[i64]) {
    assert_eq!(eval_ints(source), expected);
}

#[test_case("#2 #3 <", true; "less")]
#[test_case("#3 #2 <", false; "not less")]
#[test_case("#3 #2 >", true; "greater")]
#[test_case("#2 #2 >", false; "not greater")]
#[test_case("#1 #1 eq?", true; "equal ints")]
#[test_case("#1 true eq?", false; "different kinds")]
#[test_case("'a 'a eq?", true; "equal strings")]
#[test_case("{ #1 { #2 } } { #1 { #2 } } eq?", true; "equal nested arrays")]
#[test_case("{ #1 } { #1 #2 } eq?", false; "different lengths")]
#[test_case("&dup &dup eq?", true; "same word closure")]
#[test_case("@nothing @nothing eq?", true; "absent values")]
#[test_case("true false eq?", false; "booleans")]
fn bool_results(source: &str, expected: bool) {
    assert_eq!(eval_and_stack(source).unwrap(), vec![Value::Bool(expected)]);
}

#[test_case("'a 'b concat", "ab"; "concat")]
#[test_case("'hello_there", "hello there"; "underscores")]
#[test_case("'x_ 'y concat", "x y"; "concat order")]
fn string_results(source: &str, expected: &str) {
    assert_eq!(eval_and_stack(source).unwrap(), vec![Value::from(expected)]);
}

#[test_case("#1 #0 /", ErrorKind::DivisionByZero; "divide by zero")]
#[test_case("#1 #0 %", ErrorKind::DivisionByZero; "mod by zero")]
#[test_case("+", ErrorKind::StackUnderflow("data"); "empty data stack")]
#[test_case("<-", ErrorKind::StackUnderflow("aux"); "empty aux stack")]
#[test_case("#12x", ErrorKind::NumericParse("12x".to_string()); "bad integer")]
#[test_case("#", ErrorKind::NumericParse(String::new()); "empty integer")]
#[test_case("'a #1 +", ErrorKind::TypeMismatch { expected: "integer", found: "string" }; "add string")]
#[test_case("#1 call", ErrorKind::TypeMismatch { expected: "closure", found: "integer" }; "call int")]
#[test_case("#1 [ ] if", ErrorKind::TypeMismatch { expected: "boolean", found: "integer" }; "if int")]
#[test_case("#1 #2 nth", ErrorKind::TypeMismatch { expected: "array", found: "integer" }; "nth on int")]
#[test_case("#1 'a concat", ErrorKind::TypeMismatch { expected: "string", found: "integer" }; "concat int")]
#[test_case("{ } #0 #1 set-nth", ErrorKind::IndexOutOfRange { index: 0, length: 0 }; "set past end")]
#[test_case("{ #1 } #-1 nth", ErrorKind::IndexOutOfRange { index: -1, length: 1 }; "negative index")]
#[test_case("&no-such-word", ErrorKind::UnknownWord("no-such-word".to_string()); "word reference")]
#[test_case("[ #1", ErrorKind::UnterminatedLambda; "unterminated")]
#[test_case("#1 [ ] }", ErrorKind::StackUnderflow("data"); "missing marker")]
fn errors(source: &str, expected: ErrorKind) {
    assert_eq!(eval_and_stack(source).unwrap_err().kind(), &expected);
}
