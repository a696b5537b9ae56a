use logos::Logos;
use std::fmt;

/// Tokens of the inline markdown language
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'src> {
    #[token("**")]
    Bold,

    #[token("_")]
    Italic,

    #[token("[")]
    LBracket,

    #[token("]")]
    RBracket,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // A lone `*` is not structural and starts a text run
    #[regex(r"[^*_\[\]()]+", |lex| lex.slice())]
    #[regex(r"\*[^*_\[\]()]*", |lex| lex.slice())]
    Text(&'src str),
}

impl<'src> Token<'src> {
    /// The source text this token was read from
    pub fn as_str(&self) -> &'src str {
        match self {
            Token::Bold => "**",
            Token::Italic => "_",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::Text(text) => text,
        }
    }

    /// Whether the parser treats this token as markup
    pub fn is_structural(&self) -> bool {
        !matches!(self, Token::Text(_))
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lazy token stream over one markdown string.
///
/// A clone continues independently from the point it was taken.
#[derive(Clone)]
pub struct Tokens<'src> {
    lexer: logos::Lexer<'src, Token<'src>>,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next()?;
        // Every input character belongs to some token, so this fallback
        // only guards against lexer changes.
        Some(token.unwrap_or_else(|()| Token::Text(self.lexer.slice())))
    }
}

/// Tokenizes a markdown string.
///
/// ```
/// # use folio::markdown::{tokenize, Token};
/// let tokens: Vec<_> = tokenize("a **b**").collect();
/// assert_eq!(
///     tokens,
///     vec![Token::Text("a "), Token::Bold, Token::Text("b"), Token::Bold]
/// );
/// ```
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens {
        lexer: Token::lexer(source),
    }
}
