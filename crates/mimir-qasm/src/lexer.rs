//! Lexer for the OpenQASM 2.0 interchange subset.

use logos::Logos;

/// Tokens for the QASM 2.0 subset.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    // Keywords
    #[token("OPENQASM")]
    OpenQasm,

    #[token("include")]
    Include,

    #[token("qreg")]
    Qreg,

    #[token("creg")]
    Creg,

    // Constants
    #[token("pi")]
    Pi,

    // Literals
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    FloatLiteral(f64),

    #[regex(r"[0-9]+", |lex| lex.slice().parse::<u64>().ok())]
    IntLiteral(u64),

    #[regex(r#""[^"]*""#, |lex| {
        let s = lex.slice();
        Some(s[1..s.len()-1].to_string())
    })]
    StringLiteral(String),

    // Identifiers (gate names, register names)
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Punctuation
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token(",")]
    Comma,

    #[token(";")]
    Semicolon,

    #[token("-")]
    Minus,

    #[token("/")]
    Slash,

    #[token("*")]
    Star,
}

/// A token paired with its 1-based source line.
#[derive(Debug, Clone)]
pub struct Spanned {
    /// The token.
    pub token: Token,
    /// 1-based line number where the token starts.
    pub line: usize,
}

/// Tokenize a source string, tracking line numbers. Returns the line of the
/// first invalid token on failure.
pub fn tokenize(source: &str) -> Result<Vec<Spanned>, usize> {
    let mut tokens = vec![];
    let mut lexer = Token::lexer(source);
    while let Some(result) = lexer.next() {
        let line = source[..lexer.span().start]
            .bytes()
            .filter(|&b| b == b'\n')
            .count()
            + 1;
        match result {
            Ok(token) => tokens.push(Spanned { token, line }),
            Err(()) => return Err(line),
        }
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_header() {
        let tokens = tokenize("OPENQASM 2.0;\nqreg q[3];").unwrap();
        assert_eq!(tokens[0].token, Token::OpenQasm);
        assert_eq!(tokens[1].token, Token::FloatLiteral(2.0));
        assert_eq!(tokens[2].token, Token::Semicolon);
        assert_eq!(tokens[3].token, Token::Qreg);
        assert_eq!(tokens[3].line, 2);
    }

    #[test]
    fn test_tokenize_skips_comments() {
        let tokens = tokenize("// header comment\nh q[0];").unwrap();
        assert_eq!(tokens[0].token, Token::Identifier("h".into()));
        assert_eq!(tokens[0].line, 2);
    }

    #[test]
    fn test_tokenize_rejects_garbage() {
        let err = tokenize("h q[0];\n@bad").unwrap_err();
        assert_eq!(err, 2);
    }

    #[test]
    fn test_tokenize_params() {
        let tokens = tokenize("rx(-pi/4) q[0];").unwrap();
        let kinds: Vec<_> = tokens.iter().map(|s| s.token.clone()).collect();
        assert!(kinds.contains(&Token::Pi));
        assert!(kinds.contains(&Token::Minus));
        assert!(kinds.contains(&Token::Slash));
        assert!(kinds.contains(&Token::IntLiteral(4)));
    }
}
