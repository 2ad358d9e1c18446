use beast_comments::parser::tokenizer::{Symbol, Token, Tokenizer};
use beast_comments::tokenize;

fn texts(input: &str) -> Vec<&str> {
    Tokenizer::new(input).map(|token| token.as_str()).collect()
}

#[test]
fn test_simple_pair() {
    assert_eq!(texts("a=1"), vec!["a", "=", "1"]);
}

#[test]
fn test_trailing_symbol_ends_with_empty_token() {
    assert_eq!(texts("a=1,"), vec!["a", "=", "1", ",", ""]);
}

#[test]
fn test_empty_input_yields_single_empty_token() {
    let tokens: Vec<Token> = tokenize("").collect();
    assert_eq!(tokens, vec![Token::Text("")]);
}

#[test]
fn test_list_value() {
    let tokens: Vec<Token> = tokenize("&rate={0.1,0.2}").collect();
    assert_eq!(
        tokens,
        vec![
            Token::Symbol(Symbol::Ampersand),
            Token::Text("rate"),
            Token::Symbol(Symbol::Equals),
            Token::Symbol(Symbol::OpenBrace),
            Token::Text("0.1"),
            Token::Symbol(Symbol::Comma),
            Token::Text("0.2"),
            Token::Symbol(Symbol::CloseBrace),
            Token::Text(""),
        ]
    );
}

#[test]
fn test_consecutive_symbols_have_no_empty_tokens_between() {
    assert_eq!(texts("&&==,,{}"), vec!["&", "&", "=", "=", ",", ",", "{", "}", ""]);
}

#[test]
fn test_quotes_and_spaces_are_plain_text() {
    assert_eq!(
        texts("&\"Mount Cook\"=\"alpine, high\""),
        vec!["&", "\"Mount Cook\"", "=", "\"alpine", ",", " high\""]
    );
}

#[test]
fn test_tokens_partition_input() {
    let inputs = [
        "&height_95%_HPD={40.05717565800388,70.61032474932166},height_median=47.571176094511124,",
        "height=5555",
        "{,}=&",
        "",
        "plain",
    ];
    for input in inputs {
        let joined: String = tokenize(input).map(|token| token.as_str()).collect();
        assert_eq!(joined, input);
    }
}

#[test]
fn test_only_last_token_may_be_empty() {
    let tokens: Vec<Token> = tokenize("&a={x,y},b=z,").collect();
    let (last, rest) = tokens.split_last().unwrap();
    assert!(last.is_empty_text());
    assert!(rest.iter().all(|token| !token.is_empty_text()));
}

#[test]
fn test_exhausted_tokenizer_stays_exhausted() {
    let mut tokenizer = Tokenizer::new("x");
    assert_eq!(tokenizer.next(), Some(Token::Text("x")));
    assert_eq!(tokenizer.next(), None);
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn test_symbol_comparison_is_by_value() {
    let tokens: Vec<Token> = tokenize("{}").collect();
    assert!(tokens[1].is_symbol(Symbol::CloseBrace));
    assert_eq!(tokens[1], Token::Symbol(Symbol::CloseBrace));
    assert_eq!(Symbol::CloseBrace.to_string(), "}");
}
