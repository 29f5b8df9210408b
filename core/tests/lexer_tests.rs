use tempolex::lexer::lex;
use tempolex::{Scanner, SymbolTable, Token, TokenKind};

fn tokens(source: &str) -> Vec<Token> {
    lex(source).expect("lexing should succeed")
}

fn token_kinds(source: &str) -> Vec<TokenKind> {
    tokens(source).into_iter().map(|t| t.kind()).collect()
}

fn token_texts(source: &str) -> Vec<String> {
    tokens(source)
        .into_iter()
        .map(|t| t.text().to_owned())
        .collect()
}

#[test]
fn lex_program_header() {
    let kinds = token_kinds("program { int x }");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Program,
            TokenKind::LeftBrace,
            TokenKind::Int,
            TokenKind::Identifier,
            TokenKind::RightBrace,
        ]
    );
}

#[test]
fn lex_identifiers_keep_exact_text_and_columns() {
    let toks = tokens("  _tmp1 alpha_Beta9 x");
    let summary: Vec<(&str, TokenKind, usize, usize)> = toks
        .iter()
        .map(|t| (t.text(), t.kind(), t.start_column, t.end_column))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("_tmp1", TokenKind::Identifier, 3, 7),
            ("alpha_Beta9", TokenKind::Identifier, 9, 19),
            ("x", TokenKind::Identifier, 21, 21),
        ]
    );
}

#[test]
fn lex_reserved_words_share_the_identifier_path() {
    let kinds = token_kinds("if then else while function return switch case default");
    assert_eq!(
        kinds,
        vec![
            TokenKind::If,
            TokenKind::Then,
            TokenKind::Else,
            TokenKind::While,
            TokenKind::Function,
            TokenKind::Return,
            TokenKind::Switch,
            TokenKind::Case,
            TokenKind::Default,
        ]
    );
}

#[test]
fn lex_reserved_prefix_is_still_an_identifier() {
    let toks = tokens("iffy whiles timestamps");
    assert!(toks.iter().all(|t| t.kind() == TokenKind::Identifier));
}

#[test]
fn lex_literal_type_keywords() {
    assert_eq!(
        token_kinds("timestamp ustring boolean"),
        vec![TokenKind::TimeStamp, TokenKind::Ustring, TokenKind::Boolean]
    );
}

#[test]
fn lex_integers_verbatim() {
    let toks = tokens("0 007 10000 123456789012345678901234567890");
    assert!(toks.iter().all(|t| t.kind() == TokenKind::IntegerLiteral));
    assert_eq!(
        toks.iter().map(|t| t.text()).collect::<Vec<_>>(),
        vec!["0", "007", "10000", "123456789012345678901234567890"]
    );
}

#[test]
fn lex_five_digit_boundary_is_an_integer() {
    let toks = tokens("10000");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].kind(), TokenKind::IntegerLiteral);
    assert_eq!(toks[0].text(), "10000");
    assert_eq!((toks[0].start_column, toks[0].end_column), (1, 5));
}

#[test]
fn lex_four_digits_without_tilde_is_an_integer() {
    assert_eq!(
        token_kinds("2023 - 1"),
        vec![
            TokenKind::IntegerLiteral,
            TokenKind::Minus,
            TokenKind::IntegerLiteral,
        ]
    );
}

#[test]
fn lex_integer_followed_by_identifier() {
    assert_eq!(token_texts("12ab"), vec!["12", "ab"]);
}

#[test]
fn lex_operators() {
    let kinds = token_kinds("a + b - c * d / e | f & g");
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Minus,
            TokenKind::Identifier,
            TokenKind::Multiply,
            TokenKind::Identifier,
            TokenKind::Divide,
            TokenKind::Identifier,
            TokenKind::Or,
            TokenKind::Identifier,
            TokenKind::And,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn lex_two_char_operators_are_greedy() {
    let toks = tokens(">=");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].kind(), TokenKind::GreaterEqual);
    assert_eq!(toks[0].text(), ">=");
    assert_eq!((toks[0].start_column, toks[0].end_column), (1, 2));

    assert_eq!(
        token_kinds("a==b != c<=d"),
        vec![
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Identifier,
            TokenKind::NotEqual,
            TokenKind::Identifier,
            TokenKind::LessEqual,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn lex_one_char_fallback_leaves_second_char() {
    let toks = tokens("> ");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].kind(), TokenKind::Greater);
    assert_eq!((toks[0].start_column, toks[0].end_column), (1, 1));

    assert_eq!(token_texts("(x)"), vec!["(", "x", ")"]);
    assert_eq!(token_texts("=<"), vec!["=", "<"]);
}

#[test]
fn lex_punctuation() {
    assert_eq!(
        token_kinds("f(a, b): c;"),
        vec![
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn lex_comment_produces_no_token() {
    let toks = tokens("// note\nfoo");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].kind(), TokenKind::Identifier);
    assert_eq!(toks[0].text(), "foo");
    assert_eq!(toks[0].line, 2);
}

#[test]
fn lex_trailing_comment_after_code() {
    assert_eq!(token_texts("x = 1 // set x\ny"), vec!["x", "=", "1", "y"]);
}

#[test]
fn lex_comment_only_input_is_empty() {
    let mut source = String::new();
    for i in 0..10_000 {
        source.push_str(&format!("// comment {i}\n"));
    }
    assert!(tokens(&source).is_empty());
}

#[test]
fn lex_utf16_literal() {
    let toks = tokens("\\u00e9\\u00e8 ");
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].kind(), TokenKind::Utf16StringLiteral);
    assert_eq!(toks[0].text(), "\\u00e9\\u00e8");
    assert_eq!((toks[0].start_column, toks[0].end_column), (1, 12));
}

#[test]
fn lex_utf16_literal_before_more_tokens() {
    assert_eq!(
        token_kinds("ustring s = \\u0041\\u0042\tx"),
        vec![
            TokenKind::Ustring,
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Utf16StringLiteral,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn lex_tracks_lines() {
    let toks = tokens("a\n\n  b\nc d");
    let positions: Vec<(usize, usize)> = toks.iter().map(|t| (t.line, t.start_column)).collect();
    assert_eq!(positions, vec![(1, 1), (3, 3), (4, 1), (4, 3)]);
}

#[test]
fn lex_empty_and_blank_input() {
    assert!(tokens("").is_empty());
    assert!(tokens(" \t\n\n   \n").is_empty());
}

#[test]
fn identical_spellings_share_one_symbol() {
    let toks = tokens("count + count");
    assert_eq!(toks[0].symbol, toks[2].symbol);
    assert_ne!(toks[0].symbol, toks[1].symbol);
}

#[test]
fn scanner_caches_last_line_text() {
    let mut scanner = Scanner::from_source("first line\n\nthird one\n");
    scanner.next_token().expect("scan ok");
    assert_eq!(scanner.last_line(), "first line");
    assert_eq!(scanner.line_found(), 1);

    scanner.next_token().expect("scan ok");
    scanner.next_token().expect("scan ok");
    assert_eq!(scanner.last_line(), "third one");
    assert_eq!(scanner.last_line_read(), 3);
    assert_eq!(scanner.line_found(), 3);
}

#[test]
fn scanner_can_share_a_symbol_table() {
    let mut table = SymbolTable::new();
    let known = table.intern("shared", TokenKind::Identifier);

    let mut scanner = Scanner::from_source("shared").with_symbol_table(table);
    let token = scanner
        .next_token()
        .expect("scan ok")
        .expect("one token");
    assert_eq!(token.symbol, known);
}

#[test]
fn tokens_serialize_with_text_and_kind() {
    let toks = tokens(">=");
    let json = serde_json::to_value(&toks[0]).expect("serializable");
    assert_eq!(
        json,
        serde_json::json!({
            "start_column": 1,
            "end_column": 2,
            "line": 1,
            "symbol": { "text": ">=", "kind": "GreaterEqual" }
        })
    );
}
