use super::{SyntaxKind, TextRange, TextSize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: SyntaxKind,
    pub range: TextRange,
}

impl Token {
    pub fn new(kind: SyntaxKind, range: TextRange) -> Self {
        Self { kind, range }
    }
}

pub fn tokenise(mut text: &str) -> impl Iterator<Item = Token> + '_ {
    return std::iter::from_fn({
        let mut pos = TextSize::default();
        move || {
            if text.is_empty() {
                // no more text to lex
                return None;
            }
            // make the next token
            let (kind, len) = next(text);
            let tok = Token::new(kind, TextRange::at(pos, len.into()));
            // remove the lexed text
            text = &text[len as usize..];
            pos += len.into();
            Some(tok)
        }
    });

    fn next(text: &str) -> (SyntaxKind, u32) {
        let mut c = Cursor::new(text);
        (c.next(), c.ate)
    }
}

use std::{iter::Peekable, str::Chars};

pub(crate) struct Cursor<'a> {
    chars: Peekable<Chars<'a>>,
    /// bytes consumed so far
    ate: u32,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        assert!(!text.is_empty());
        Self {
            chars: text.chars().peekable(),
            ate: 0,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn eat(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.ate += c.len_utf8() as u32;
        Some(c)
    }

    fn eat_while<P>(&mut self, pred: P)
    where
        P: Fn(char) -> bool,
    {
        while let Some(c) = self.peek() {
            if pred(c) {
                self.eat();
            } else {
                break;
            }
        }
    }

    fn next(&mut self) -> SyntaxKind {
        use SyntaxKind::*;

        let first = match self.eat() {
            Some(c) => c,
            None => return Unknown,
        };

        match first {
            c if whitespace(c) => {
                self.eat_while(whitespace);
                Whitespace
            }
            '/' => {
                if let Some('/') = self.peek() {
                    self.eat(); // eat the 2nd slash
                    self.eat_while(|c| c != '\n');
                    Comment
                } else {
                    Unknown
                }
            }
            c if ident_start(c) => {
                self.eat_while(ident);
                Ident
            }
            c @ ('-' | '.' | '0'..='9') => self.literal(c),

            ';' => SemiColon,
            ',' => Comma,
            '(' => OpenRound,
            ')' => CloseRound,
            _ => Unknown,
        }
    }

    /// Possible literal "configurations"
    /// 0
    /// 0.
    /// 0.0
    /// .0
    /// -0
    /// -0.0
    /// -.5
    fn literal(&mut self, first: char) -> SyntaxKind {
        let mut seen_dot = first == '.';
        if first == '-' && self.peek() == Some('.') {
            self.eat();
            seen_dot = true;
        }
        if first == '-' || first == '.' {
            // check that the next character is a number
            if !self.peek().map(|c| c.is_ascii_digit()).unwrap_or(false) {
                return SyntaxKind::Unknown;
            }
        }
        self.eat_while(digit);
        if !seen_dot {
            if let Some('.') = self.peek() {
                self.eat();
                self.eat_while(digit);
            }
        }
        SyntaxKind::Literal
    }
}

fn whitespace(c: char) -> bool {
    c.is_whitespace()
}

fn digit(c: char) -> bool {
    matches!(c, '0'..='9' | '_')
}

fn ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn ident(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use SyntaxKind::*;

    fn kinds(text: &str) -> Vec<SyntaxKind> {
        tokenise(text).map(|t| t.kind).collect()
    }

    #[test]
    fn statement() {
        assert_eq!(
            kinds("circle(5);"),
            [Ident, OpenRound, Literal, CloseRound, SemiColon]
        );
    }

    #[test]
    fn literals() {
        for lit in ["0", "0.", "0.0", ".5", "-1", "-1.5", "-.5", "1_000.25"] {
            assert_eq!(kinds(lit), [Literal], "{lit}");
        }
        assert_eq!(kinds("-"), [Unknown]);
        assert_eq!(kinds("-x"), [Unknown, Ident]);
    }

    #[test]
    fn trivia() {
        assert_eq!(
            kinds("// a comment\n  square"),
            [Comment, Whitespace, Ident]
        );
        assert_eq!(kinds("/ x"), [Unknown, Whitespace, Ident]);
    }

    #[test]
    fn ranges_are_in_bytes() {
        let text = "é(1)";
        let toks: Vec<_> = tokenise(text).collect();
        assert_eq!(toks[0].kind, Unknown);
        assert_eq!(&text[toks[0].range], "é");
        assert_eq!(&text[toks[2].range], "1");
    }
}
