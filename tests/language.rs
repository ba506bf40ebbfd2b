use std::{fs, path::Path};

use treelox::{
    EX_DATAERR, EX_SOFTWARE, Lox, RunOptions,
    interpreter::{
        report::{Diagnostics, ErrorReporter},
        value::Value,
    },
};
use walkdir::WalkDir;

const EXPECT: &str = "// expect: ";
const ERROR: &str = "// error: ";

fn session() -> Lox<Diagnostics, Vec<String>> {
    Lox::new(Diagnostics::default(), Vec::new())
}

fn run(source: &str) -> Lox<Diagnostics, Vec<String>> {
    let mut lox = session();
    if let Err(e) = lox.run(source) {
        panic!("Internal error while running {source:?}: {e}");
    }
    lox
}

fn assert_output(source: &str, expected: &[&str]) {
    let lox = run(source);
    assert!(lox.reporter().messages.is_empty(),
            "Script reported errors: {:?}",
            lox.reporter().messages);
    assert_eq!(lox.output(), expected, "Output of {source:?}");
}

fn assert_error(source: &str, expected: &str) {
    let lox = run(source);
    assert_eq!(lox.reporter().messages, [expected], "Diagnostics of {source:?}");
}

#[test]
fn script_corpus_passes() {
    let mut count = 0;
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/scripts");

    for entry in
        WalkDir::new(&root).sort_by_file_name()
                           .into_iter()
                           .filter_map(Result::ok)
                           .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let (expected_output, expected_errors) = extract_expectations(&source);

        count += 1;
        let lox = run(&source);
        let errors: Vec<String> =
            lox.reporter().messages.iter().map(|m| m.replace('\n', " ")).collect();

        assert_eq!(lox.output(), &expected_output, "Output of {path:?}");
        assert_eq!(errors, expected_errors, "Diagnostics of {path:?}");
    }

    assert!(count > 0, "No scripts found in {root:?}");
}

/// Collects `// expect: ` and `// error: ` annotations in source order.
///
/// Runtime errors span two lines; annotations write them on one line with a
/// space in place of the line break.
fn extract_expectations(source: &str) -> (Vec<String>, Vec<String>) {
    let mut output = Vec::new();
    let mut errors = Vec::new();

    for line in source.lines() {
        if let Some((_, expected)) = line.split_once(EXPECT) {
            output.push(expected.to_string());
        } else if let Some((_, expected)) = line.split_once(ERROR) {
            errors.push(expected.to_string());
        }
    }

    (output, errors)
}

#[test]
fn arithmetic_and_precedence() {
    assert_output("print 1 + 2 * 3;", &["7"]);
    assert_output("print (1 + 2) * 3;", &["9"]);
    assert_output("print 10 - 4 - 3;", &["3"]);
    assert_output("print 7 / 2;", &["3.5"]);
    assert_output("print -(2 * 3);", &["-6"]);
}

#[test]
fn number_formatting() {
    assert_output("print 3.0;", &["3"]);
    assert_output("print 45.67;", &["45.67"]);
    assert_output("print 0.1 + 0.2;", &["0.30000000000000004"]);
    assert_output("print 1 / 0;", &["Infinity"]);
    assert_output("print -1 / 0;", &["-Infinity"]);
    assert_output("print 0 / 0;", &["NaN"]);
}

#[test]
fn strings_concatenate_without_coercion() {
    assert_output(r#"print "1" + "2";"#, &["12"]);
    assert_output(r#"print "" + "";"#, &[""]);
    assert_error(r#"print 1 + "2";"#, "Plus requires numbers or strings.\n[line 1]");
    assert_error(r#"print "a" + nil;"#, "Plus requires numbers or strings.\n[line 1]");
}

#[test]
fn operand_type_errors() {
    assert_error("print -\"x\";", "Operand must be a number.\n[line 1]");
    assert_error("print true * 2;", "Operands must be a number.\n[line 1]");
    assert_error("print 1 < \"2\";", "Operands must be a number.\n[line 1]");
}

#[test]
fn comparison() {
    assert_output("print 1 < 2; print 2 <= 2; print 3 > 4; print 4 >= 4;",
                  &["true", "true", "false", "true"]);
    assert_output("print 2 >= 3; print 3 <= 2;", &["false", "false"]);
}

#[test]
fn equality_never_coerces() {
    assert_output("print nil == nil;", &["true"]);
    assert_output("print nil == false;", &["false"]);
    assert_output("print 1 == \"1\";", &["false"]);
    assert_output("print \"a\" == \"a\";", &["true"]);
    assert_output("print 1 != 2;", &["true"]);
    assert_output("print 0 / 0 == 0 / 0;", &["true"]);
}

#[test]
fn truthiness() {
    assert_output("print !nil; print !false; print !0; print !\"\"; print !!true;",
                  &["true", "true", "false", "false", "true"]);
}

#[test]
fn variables() {
    assert_output("var a = 1; var b = a + 1; print b;", &["2"]);
    assert_output("var a; print a;", &["nil"]);
    assert_output("var a = 1; var a = \"again\"; print a;", &["again"]);
}

#[test]
fn undefined_variable_halts_the_run() {
    let lox = run("print 1;\nprint missing;\nprint 3;");

    assert_eq!(lox.output(), &["1"]);
    assert_eq!(lox.reporter().messages, ["Undefined variable 'missing'.\n[line 2]"]);
    assert_eq!(lox.exit_code(), Some(EX_SOFTWARE));
}

#[test]
fn syntax_error_prevents_execution() {
    let lox = run("print 1;\nprint ;\nprint 3;");

    assert!(lox.output().is_empty());
    assert_eq!(lox.reporter().messages, ["[line 2] Error at ';': Expect expression."]);
    assert_eq!(lox.exit_code(), Some(EX_DATAERR));
}

#[test]
fn scan_error_prevents_execution() {
    let lox = run("print 1; @");

    assert!(lox.output().is_empty());
    assert_eq!(lox.reporter().messages, ["[line 1] Error: Unexpected character: @"]);
    assert_eq!(lox.exit_code(), Some(EX_DATAERR));
}

#[test]
fn deep_nesting_is_reported_instead_of_overflowing() {
    let mut lox = session();
    lox.run(&format!("print {}1{};", "(".repeat(5000), ")".repeat(5000))).unwrap();

    assert!(lox.output().is_empty());
    assert_eq!(lox.reporter().messages, ["[line 1] Error at '(': Too much nesting."]);
    assert_eq!(lox.exit_code(), Some(EX_DATAERR));

    lox.reset_error();
    lox.run(&format!("print {}1{};", "(".repeat(100), ")".repeat(100))).unwrap();
    assert_eq!(lox.output(), &["1"]);
}

#[test]
fn clean_run_has_no_exit_code() {
    assert_eq!(run("print 1;").exit_code(), None);
    assert_eq!(run("").exit_code(), None);
}

#[test]
fn session_keeps_globals_between_runs() {
    let mut lox = session();
    lox.run("var counter = 1;").unwrap();
    lox.run("var counter = counter + 1;").unwrap();
    lox.run("print counter;").unwrap();

    assert_eq!(lox.output(), &["2"]);
    assert!(lox.interpreter().environment().contains("counter"));
}

#[test]
fn prompt_recovers_from_syntax_errors() {
    let mut lox = session();

    lox.run("print ;").unwrap();
    assert_eq!(lox.exit_code(), Some(EX_DATAERR));
    lox.reset_error();

    lox.run("print \"still here\";").unwrap();
    assert_eq!(lox.output(), &["still here"]);
    assert_eq!(lox.exit_code(), None);
}

#[test]
fn runtime_error_flag_is_sticky() {
    let mut lox = session();

    lox.run("print nope;").unwrap();
    lox.reset_error();
    lox.run("print 1;").unwrap();

    assert_eq!(lox.output(), &["1"]);
    assert!(lox.reporter().had_runtime_error());
    assert_eq!(lox.exit_code(), Some(EX_SOFTWARE));
}

#[test]
fn runtime_error_keeps_earlier_bindings() {
    let mut lox = session();
    lox.run("var kept = 1; var broken = -nil; var never = 2;").unwrap();

    let environment = lox.interpreter().environment();
    assert!(environment.contains("kept"));
    assert!(!environment.contains("broken"));
    assert!(!environment.contains("never"));
}

#[test]
fn expression_statements_print_nothing() {
    assert_output("1 + 2; \"ignored\"; nil;", &[]);
}

#[test]
fn dump_tokens_precedes_program_output() {
    let mut lox = session().with_options(RunOptions { dump_tokens: true,
                                                      ..RunOptions::default() });
    lox.run("print 1;").unwrap();

    assert_eq!(lox.output(),
               &["PRINT print null", "NUMBER 1 1.0", "SEMICOLON ; null", "EOF  null", "1"]);
}

#[test]
fn dump_ast_precedes_program_output() {
    let mut lox = session().with_options(RunOptions { dump_ast: true,
                                                      ..RunOptions::default() });
    lox.run("var x = -2 * (3 + 4); print x;").unwrap();

    assert_eq!(lox.output(), &["(var x (* (- 2) (group (+ 3 4))))", "(print x)", "-14"]);
}

#[test]
fn dump_ast_is_skipped_after_syntax_errors() {
    let mut lox = session().with_options(RunOptions { dump_ast: true,
                                                      ..RunOptions::default() });
    lox.run("print 1; print (;").unwrap();

    assert!(lox.output().is_empty());
}

#[test]
fn values_display() {
    assert_eq!(Value::Nil.to_string(), "nil");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Number(-0.5).to_string(), "-0.5");
    assert_eq!(Value::from("raw \\n").to_string(), "raw \\n");
}
