use treelox::{
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        lexer::{Token, TokenType},
        value::Value,
    },
};

fn name(lexeme: &str) -> Token {
    Token::new(TokenType::Identifier, lexeme, None, 1)
}

#[test]
fn define_then_get() {
    let mut environment = Environment::new();
    environment.define("answer", Value::Number(42.0));

    assert_eq!(environment.get(&name("answer")), Ok(&Value::Number(42.0)));
}

#[test]
fn redefining_overwrites() {
    let mut environment = Environment::new();
    environment.define("x", Value::from("first"));
    environment.define("x", Value::Bool(true));

    assert_eq!(environment.get(&name("x")), Ok(&Value::Bool(true)));
}

#[test]
fn nil_is_a_real_binding() {
    let mut environment = Environment::new();
    environment.define("nothing", Value::Nil);

    assert!(environment.contains("nothing"));
    assert_eq!(environment.get(&name("nothing")), Ok(&Value::Nil));
}

#[test]
fn undefined_name_is_an_error() {
    let environment = Environment::new();
    let token = Token::new(TokenType::Identifier, "missing", None, 7);

    let error = environment.get(&token).unwrap_err();

    assert_eq!(error, RuntimeError::UndefinedVariable { name: token });
    assert_eq!(error.to_string(), "Undefined variable 'missing'.\n[line 7]");
    assert!(!environment.contains("missing"));
}

#[test]
fn lookup_falls_through_to_enclosing_scope() {
    let mut globals = Environment::new();
    globals.define("outer", Value::Number(1.0));
    globals.define("shadowed", Value::from("global"));

    let mut local = Environment::with_enclosing(globals);
    local.define("shadowed", Value::from("local"));

    assert_eq!(local.get(&name("outer")), Ok(&Value::Number(1.0)));
    assert_eq!(local.get(&name("shadowed")), Ok(&Value::from("local")));
    assert!(local.contains("outer"));
}

#[test]
fn leaving_a_scope_discards_its_bindings() {
    let mut globals = Environment::new();
    globals.define("kept", Value::Nil);

    let mut local = Environment::with_enclosing(globals);
    local.define("temporary", Value::Number(2.0));

    let globals = local.into_enclosing().expect("local scope has a parent");

    assert!(globals.contains("kept"));
    assert!(!globals.contains("temporary"));
    assert!(globals.into_enclosing().is_none());
}
