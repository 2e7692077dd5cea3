// End to end tests of the language, driven through the embedding API with the output captured in
// memory.

use pretty_assertions::assert_eq;
use skynet::lang::bootstrap::run_bootstrap;
use skynet::runtime::built_ins::{base_words::register_base_words, io_words::register_io_words};
use skynet::runtime::config::{InterpreterConfig, QuoteStyle};
use skynet::runtime::data_structures::value::Value;
use skynet::runtime::error::{ErrorKind, Result};
use skynet::runtime::interpreter::skynet_interpreter::SkynetInterpreter;
use skynet::runtime::interpreter::{CodeManagement, Interpreter, InterpreterStack, WordManagement};
use skynet::runtime::output::CapturedOutput;
use std::io::Cursor;

fn quiet_config() -> InterpreterConfig {
    InterpreterConfig {
        banner: false,
        ..InterpreterConfig::default()
    }
}

fn new_interpreter(config: InterpreterConfig) -> (SkynetInterpreter, CapturedOutput) {
    let output = CapturedOutput::new();
    let mut interpreter = SkynetInterpreter::new(config, Box::new(output.clone()));

    register_base_words(&mut interpreter);
    register_io_words(&mut interpreter);
    run_bootstrap(&mut interpreter).unwrap();

    (interpreter, output)
}

fn run(source: &str) -> (SkynetInterpreter, CapturedOutput, Result<()>) {
    let (mut interpreter, output) = new_interpreter(quiet_config());
    let result = interpreter.process_source("<test>", source);

    (interpreter, output, result)
}

fn printed(source: &str) -> Vec<String> {
    let (_, output, result) = run(source);

    result.unwrap();
    output.lines()
}

fn stack_of(source: &str) -> Vec<Value> {
    let (interpreter, _, result) = run(source);

    result.unwrap();
    interpreter.stack().clone()
}

fn error_of(source: &str) -> ErrorKind {
    let (_, _, result) = run(source);

    result.unwrap_err().kind().clone()
}

fn ints(values: &[i64]) -> Value {
    Value::from(values.iter().map(|value| Value::Int(*value)).collect::<Vec<_>>())
}

#[test]
fn banner_is_printed_after_bootstrap_by_default() {
    let (_, output) = new_interpreter(InterpreterConfig::default());

    assert_eq!(output.lines(), vec!["Willkommen bei SkynetRPN!"]);
}

#[test]
fn banner_can_be_disabled() {
    let (_, output) = new_interpreter(quiet_config());

    assert!(output.lines().is_empty());
}

#[test]
fn arrays_alias_through_variables() {
    let stack = stack_of("{ #1 #2 #3 } !x @x #0 #99 set-nth pop @x");

    assert_eq!(stack, vec![ints(&[99, 2, 3])]);
}

#[test]
fn calling_a_block_matches_inline_code() {
    assert_eq!(stack_of("#4 [ #1 + ] call"), stack_of("#4 #1 +"));
}

#[test]
fn zero_through_counts_up_inclusively() {
    assert_eq!(
        printed("#5 [ . ] 0-through"),
        vec!["0", "1", "2", "3", "4", "5"]
    );
    assert!(printed("#-1 [ . ] 0-through").is_empty());
}

#[test]
fn possibly_matches_on_its_variant() {
    assert_eq!(printed("is match 'is [ 'matched . ] ||"), vec!["matched"]);
    assert!(printed("is match 'isn't [ 'matched . ] ||").is_empty());
    assert!(stack_of("isn't match 'is [ 'matched . ] ||").is_empty());
}

#[test]
fn adt_constructors_keep_fields_in_stack_order() {
    let stack = stack_of("'pair { { 'pair #2 } { 'unit #0 } } adt #1 #2 pair unit");

    assert_eq!(
        stack,
        vec![
            Value::from(vec![Value::from("pair"), Value::Int(1), Value::Int(2)]),
            Value::from(vec![Value::from("unit")]),
        ]
    );
}

#[test]
fn matched_fields_are_spilled_for_the_branch() {
    let source = "'pair { { 'pair #2 } } adt #10 #3 pair match 'pair [ - . ] ||";

    assert_eq!(printed(source), vec!["7"]);
}

#[test]
fn several_arms_can_be_tried_in_turn() {
    let source = "'shape { { 'circle #1 } { 'square #1 } } adt \
                  #4 square match \
                  'circle [ 'circle_of . . ] || \
                  'square [ 'square_of . . ] ||";

    assert_eq!(printed(source), vec!["square of", "4"]);
}

#[test]
fn unknown_word_stops_evaluation() {
    let (interpreter, output, result) = run("#1 . foo #2 .");
    let error = result.unwrap_err();

    assert_eq!(error.kind(), &ErrorKind::UnknownWord("foo".to_string()));
    assert_eq!(output.lines(), vec!["1"]);
    assert!(interpreter.stack().is_empty());
    assert!(error.to_string().contains("foo"));
}

#[test]
fn unknown_word_inside_a_block_fails_while_compiling() {
    let (interpreter, _, result) = run("#1 [ nope ] #2");

    assert_eq!(
        result.unwrap_err().kind(),
        &ErrorKind::UnknownWord("nope".to_string())
    );
    assert_eq!(interpreter.stack(), &vec![Value::Int(1)]);
}

#[test]
fn closing_bracket_outside_a_block_is_unknown() {
    assert_eq!(error_of("]"), ErrorKind::UnknownWord("]".to_string()));
}

#[test]
fn unterminated_block_reports_where_it_opened() {
    let (_, _, result) = run("#1\n  [ #1 [ #2 ]");
    let error = result.unwrap_err();
    let location = error.location().clone().unwrap();

    assert_eq!(error.kind(), &ErrorKind::UnterminatedLambda);
    assert_eq!(location.path(), "<test>");
    assert_eq!(location.line(), 2);
    assert_eq!(location.column(), 3);
}

#[test]
fn errors_carry_the_word_call_stack() {
    let (_, _, result) = run("'boom [ #1 #0 / ] def boom");
    let error = result.unwrap_err();

    let words: Vec<String> = error
        .call_stack()
        .as_ref()
        .unwrap()
        .iter()
        .map(|item| item.word().clone())
        .collect();

    assert_eq!(error.kind(), &ErrorKind::DivisionByZero);
    assert_eq!(words, vec!["boom", "/"]);
    assert_eq!(error.location().as_ref().unwrap().column(), 15);
}

#[test]
fn deeply_nested_blocks_compile_and_run() {
    let depth = 1000;
    let source = format!("{}#1{}", "[ ".repeat(depth), " ] call".repeat(depth));

    assert_eq!(stack_of(&source), vec![Value::Int(1)]);
}

#[test]
fn deep_recursion_through_a_word() {
    let source = "'down [ dup #0 > [ #1 - &down call ] if ] def #10000 down";

    assert_eq!(stack_of(source), vec![Value::Int(0)]);
}

#[test]
fn long_curry_chains_call_without_recursing() {
    let source = "[ ] #200000 [ swap curry ] 0-through !keep @keep call";
    let stack = stack_of(source);

    assert_eq!(stack.len(), 200_001);
    assert_eq!(stack.first(), Some(&Value::Int(200_000)));
    assert_eq!(stack.last(), Some(&Value::Int(0)));
}

#[test]
fn long_curry_chains_drop_without_recursing() {
    assert!(stack_of("[ ] #200000 [ swap curry ] 0-through pop").is_empty());
}

#[test]
fn deeply_nested_arrays_print_compare_and_drop() {
    let build = "{ } #100000 [ pop { swap } ] 0-through";
    let expected = format!("{}{}", "[".repeat(100_002), "]".repeat(100_002));

    assert_eq!(printed(&format!("{} .", build)), vec![expected]);
    assert_eq!(
        stack_of(&format!("{} {} eq?", build, build)),
        vec![Value::Bool(true)]
    );
}

#[test]
fn a_block_cannot_name_the_word_it_is_defining() {
    assert_eq!(
        error_of("'loop [ loop ] def"),
        ErrorKind::UnknownWord("loop".to_string())
    );
}

#[test]
fn blocks_bind_words_when_compiled() {
    let source = "'inc [ #1 + ] def \
                  'add-two [ inc inc ] def \
                  'inc [ #10 + ] def \
                  #0 add-two #0 inc";

    assert_eq!(stack_of(source), vec![Value::Int(2), Value::Int(10)]);
}

#[test]
fn word_references_are_looked_up_when_run() {
    let (mut interpreter, _, result) = run("'later [ &not-yet ] def later");

    assert_eq!(
        result.unwrap_err().kind(),
        &ErrorKind::UnknownWord("not-yet".to_string())
    );

    interpreter
        .process_source("<test>", "'not-yet [ #7 ] def later call")
        .unwrap();

    assert_eq!(interpreter.stack().last(), Some(&Value::Int(7)));
}

#[test]
fn variables_default_to_absent() {
    assert_eq!(printed("@missing ."), vec!["<nil>"]);
}

#[test]
fn strict_variables_reject_unset_names() {
    let (mut interpreter, _) = new_interpreter(InterpreterConfig {
        strict_variables: true,
        ..quiet_config()
    });

    let error = interpreter.process_source("<test>", "@missing").unwrap_err();

    assert_eq!(
        error.kind(),
        &ErrorKind::UndefinedVariable("missing".to_string())
    );

    interpreter
        .process_source("<test>", "#3 !present @present")
        .unwrap();
    assert_eq!(interpreter.variable("present"), Some(&Value::Int(3)));
}

#[test]
fn quote_styles() {
    assert_eq!(printed("'hello_world ."), vec!["hello world"]);

    let (mut interpreter, output) = new_interpreter(InterpreterConfig {
        quote_style: QuoteStyle::Verbatim,
        ..quiet_config()
    });

    interpreter.process_source("<test>", "'hello_world .").unwrap();
    assert_eq!(output.lines(), vec!["hello_world"]);
}

#[test]
fn closures_print_in_source_form() {
    assert_eq!(
        printed("[ #1 [ 'a ] call + ] . &dup . #1 &dup curry ."),
        vec!["[ #1 [ 'a ] call + ]", "&dup", "1 &dup curry"]
    );
}

#[test]
fn dbg_prints_the_stack_without_changing_it() {
    let (interpreter, output, result) = run("#1 'a { #2 } dbg");

    result.unwrap();
    assert_eq!(output.lines(), vec!["[1 a [2]]"]);
    assert_eq!(interpreter.stack().len(), 3);
}

#[test]
fn self_containing_arrays_print() {
    assert_eq!(printed("{ #1 } !a @a @a push-arr ."), vec!["[1 [...]]"]);
}

#[test]
fn array_pops_leave_the_value_on_top() {
    assert_eq!(
        stack_of("{ #1 #2 #3 } arr-pop-front"),
        vec![ints(&[2, 3]), Value::Int(1)]
    );
    assert_eq!(
        stack_of("{ #1 #2 #3 } arr-pop-back"),
        vec![ints(&[1, 2]), Value::Int(3)]
    );
    assert_eq!(
        stack_of("{ #1 #2 } !a @a arr-pop-front pop pop @a"),
        vec![ints(&[1, 2])]
    );
}

#[test]
fn array_errors() {
    assert_eq!(
        error_of("#0 new-arr arr-pop-front"),
        ErrorKind::IndexOutOfRange {
            index: 0,
            length: 0
        }
    );
    assert_eq!(
        error_of("{ #1 #2 } #5 nth"),
        ErrorKind::IndexOutOfRange {
            index: 5,
            length: 2
        }
    );
    assert_eq!(
        error_of("#-1 new-arr"),
        ErrorKind::IndexOutOfRange {
            index: -1,
            length: 0
        }
    );
    assert_eq!(error_of("{ } /x"), ErrorKind::NumericParse("x".to_string()));
    assert_eq!(error_of("#1 }"), ErrorKind::StackUnderflow("data"));
}

#[test]
fn index_sigil_reads_elements() {
    assert_eq!(stack_of("{ 'a 'b } /1"), vec![Value::from("b")]);
}

#[test]
fn equality_is_structural_for_arrays_and_identity_for_closures() {
    assert_eq!(
        stack_of("{ #1 } dup eq? [ #1 ] dup eq? [ #1 ] [ #1 ] eq? { #1 { 'a } } { #1 { 'a } } eq?"),
        vec![
            Value::Bool(true),
            Value::Bool(true),
            Value::Bool(false),
            Value::Bool(true),
        ]
    );
}

#[test]
fn control_flow() {
    assert_eq!(
        printed("#0 !i [ @i #3 < ] [ @i . @i #1 + !i ] while"),
        vec!["0", "1", "2"]
    );
    assert_eq!(
        printed("true [ 'yes . ] if false [ 'no . ] if"),
        vec!["yes"]
    );
    assert_eq!(
        stack_of("false [ 'a ] [ 'b ] choose"),
        vec![Value::from("b")]
    );
    assert_eq!(printed("{ #1 #2 #3 } [ . ] for-each"), vec!["1", "2", "3"]);
}

#[test]
fn aux_stack_helpers() {
    assert_eq!(
        stack_of("#1 #2 -> -> <>swap <- <-"),
        vec![Value::Int(2), Value::Int(1)]
    );

    let (interpreter, _, result) = run("#5 c-> <-c");

    result.unwrap();
    assert_eq!(interpreter.stack(), &vec![Value::Int(5), Value::Int(5)]);
    assert_eq!(interpreter.aux_stack(), &vec![Value::Int(5)]);
}

#[test]
fn comments_are_discarded() {
    assert_eq!(stack_of("#1 (a_comment) #2 +"), vec![Value::Int(3)]);
}

#[test]
fn builtins_can_be_redefined() {
    assert_eq!(stack_of("'dup [ #42 ] def #1 dup"), vec![Value::Int(1), Value::Int(42)]);
}

#[test]
fn reader_sources_run_line_by_line() {
    let (mut interpreter, output) = new_interpreter(quiet_config());

    interpreter
        .process_reader("<reader>", Cursor::new("[ #1\n#2 + ]\ncall .\n"))
        .unwrap();

    assert_eq!(output.lines(), vec!["3"]);
}

#[test]
fn the_previous_source_is_restored_after_a_failure() {
    let (mut interpreter, _) = new_interpreter(quiet_config());

    assert!(interpreter.process_source("<bad>", "[ oops").is_err());
    assert!(interpreter.next_token().unwrap().is_none());

    interpreter.process_source("<good>", "#1").unwrap();
    assert_eq!(interpreter.stack(), &vec![Value::Int(1)]);
}

#[test]
fn words_are_found_by_name() {
    let (interpreter, _) = new_interpreter(quiet_config());

    assert!(interpreter.find_word("possibly").is_none());
    assert!(interpreter.find_word("is").is_some());
    assert!(interpreter.find_word("sigil:(").is_some());
    assert_eq!(interpreter.find_word("dup").unwrap().signature, "value -- value value");
}

#[test]
fn native_code_can_run_words_by_name() {
    let (mut interpreter, _) = new_interpreter(quiet_config());

    interpreter.push(Value::Int(2));
    interpreter
        .execute_word_named(&skynet::location_here!(), "dup")
        .unwrap();

    assert_eq!(interpreter.stack(), &vec![Value::Int(2), Value::Int(2)]);
    assert_eq!(
        interpreter
            .execute_word_named(&skynet::location_here!(), "missing")
            .unwrap_err()
            .kind(),
        &ErrorKind::UnknownWord("missing".to_string())
    );
}
