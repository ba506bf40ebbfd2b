use treelox::interpreter::{
    lexer::{Literal, Token, TokenType, scan_tokens},
    report::{Diagnostics, ErrorReporter},
};

fn scan(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::default();
    let tokens = scan_tokens(source, &mut diagnostics);
    (tokens, diagnostics)
}

fn kinds(source: &str) -> Vec<TokenType> {
    scan(source).0.into_iter().map(|t| t.kind).collect()
}

#[test]
fn always_ends_with_a_single_eof() {
    for source in ["", "   ", "print 1;", "\"open", "@#", "// only a comment", "\n\n"] {
        let (tokens, _) = scan(source);
        let last = tokens.last().expect("at least EOF");

        assert_eq!(last.kind, TokenType::Eof, "source: {source:?}");
        assert_eq!(last.lexeme, "");
        assert_eq!(last.literal, None);
        assert_eq!(tokens.iter().filter(|t| t.kind == TokenType::Eof).count(), 1);
    }
}

#[test]
fn eof_carries_the_final_line() {
    let (tokens, _) = scan("1\n2\n3");
    assert_eq!(tokens.last().map(|t| t.line), Some(3));
}

#[test]
fn arithmetic_expression() {
    use TokenType::{Eof, Number, Plus, Star};

    let (tokens, diagnostics) = scan("1 + 2 * 3");

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
               [Number, Plus, Number, Star, Number, Eof]);
    assert!(tokens.iter().all(|t| t.line == 1));
    assert_eq!(tokens[0].literal, Some(Literal::Number(1.0)));
    assert_eq!(tokens[2].literal, Some(Literal::Number(2.0)));
    assert_eq!(tokens[4].literal, Some(Literal::Number(3.0)));
    assert!(!diagnostics.had_error());
}

#[test]
fn single_character_tokens() {
    use TokenType::*;

    assert_eq!(kinds("(){},.-+;*/"),
               [LeftParen, RightParen, LeftBrace, RightBrace, Comma, Dot, Minus, Plus, Semicolon,
                Star, Slash, Eof]);
}

#[test]
fn one_or_two_character_operators() {
    use TokenType::*;

    assert_eq!(kinds("! != = == < <= > >="),
               [Bang, BangEqual, Equal, EqualEqual, Less, LessEqual, Greater, GreaterEqual, Eof]);
    assert_eq!(kinds("!==="), [BangEqual, EqualEqual, Eof]);
}

#[test]
fn comments_run_to_end_of_line() {
    use TokenType::{Eof, Number, Slash};

    let (tokens, _) = scan("1 // ignored ( ) \"\n/ 2");

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), [Number, Slash, Number, Eof]);
    assert_eq!(tokens[1].line, 2);
}

#[test]
fn whitespace_is_discarded_and_newlines_counted() {
    let (tokens, _) = scan(" \t\r\n(\n\n)");

    assert_eq!(tokens[0].kind, TokenType::LeftParen);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].kind, TokenType::RightParen);
    assert_eq!(tokens[1].line, 4);
}

#[test]
fn string_literal_keeps_raw_text() {
    let (tokens, _) = scan(r#""a\nb""#);

    assert_eq!(tokens[0].kind, TokenType::String);
    assert_eq!(tokens[0].lexeme, r#""a\nb""#);
    assert_eq!(tokens[0].literal, Some(Literal::String(r"a\nb".to_string())));
}

#[test]
fn multi_line_string_advances_line_counter() {
    let (tokens, diagnostics) = scan("\"one\ntwo\"\nx");

    assert_eq!(tokens[0].literal, Some(Literal::String("one\ntwo".to_string())));
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[1].kind, TokenType::Identifier);
    assert_eq!(tokens[1].line, 3);
    assert!(diagnostics.messages.is_empty());
}

#[test]
fn unterminated_string_reports_once_and_emits_nothing() {
    let (tokens, diagnostics) = scan("\"abc");

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), [TokenType::Eof]);
    assert_eq!(diagnostics.messages, ["[line 1] Error: Unterminated string."]);
    assert!(diagnostics.had_error());
}

#[test]
fn unterminated_string_reports_the_line_scanning_stopped_on() {
    let (_, diagnostics) = scan("print \"abc\ndef\n");

    assert_eq!(diagnostics.messages, ["[line 3] Error: Unterminated string."]);
}

#[test]
fn numbers_with_and_without_fraction() {
    let (tokens, _) = scan("42 3.14");

    assert_eq!(tokens[0].literal, Some(Literal::Number(42.0)));
    assert_eq!(tokens[1].literal, Some(Literal::Number(3.14)));
}

#[test]
fn trailing_dot_is_not_part_of_a_number() {
    use TokenType::{Dot, Eof, Identifier, Number};

    let (tokens, _) = scan("123.");
    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), [Number, Dot, Eof]);
    assert_eq!(tokens[0].lexeme, "123");

    assert_eq!(kinds("1.foo"), [Number, Dot, Identifier, Eof]);
}

#[test]
fn identifiers_and_keywords() {
    use TokenType::*;

    assert_eq!(kinds("and class else false for fun if nil or print return super this true var \
                      while"),
               [And, Class, Else, False, For, Fun, If, Nil, Or, Print, Return, Super, This, True,
                Var, While, Eof]);

    let (tokens, _) = scan("_under orchid var1 printer");
    assert!(tokens[..4].iter().all(|t| t.kind == Identifier));
    assert_eq!(tokens[1].lexeme, "orchid");
    assert_eq!(tokens[0].literal, None);
}

#[test]
fn unexpected_characters_are_reported_and_skipped() {
    use TokenType::{Eof, Number, Plus};

    let (tokens, diagnostics) = scan("1 @ + # 2");

    assert_eq!(tokens.iter().map(|t| t.kind).collect::<Vec<_>>(), [Number, Plus, Number, Eof]);
    assert_eq!(diagnostics.messages,
               ["[line 1] Error: Unexpected character: @",
                "[line 1] Error: Unexpected character: #"]);
}

#[test]
fn token_display_for_diagnostics() {
    let (tokens, _) = scan("var x = 1; \"hi\"");
    let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();

    assert_eq!(rendered,
               ["VAR var null",
                "IDENTIFIER x null",
                "EQUAL = null",
                "NUMBER 1 1.0",
                "SEMICOLON ; null",
                "STRING \"hi\" hi",
                "EOF  null"]);
}
