use super::{lexer::Token, tokenise, ScriptError, SyntaxKind, TextRange};

use SyntaxKind::*;

/// `name(arg, ...)`, before the name is resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub name: String,
    pub args: Vec<f64>,
    pub range: TextRange,
}

pub fn parse(text: &str) -> (Vec<Call>, Vec<ScriptError>) {
    let mut errors = Vec::new();
    let mut tokens = Vec::new();
    for tok in tokenise(text) {
        match tok.kind {
            Unknown => errors.push(ScriptError::UnknownChar {
                range: tok.range,
                text: text[tok.range].to_owned(),
            }),
            kind if kind.is_trivia() => {}
            _ => tokens.push(tok),
        }
    }

    let mut p = Parser {
        text,
        tokens,
        pos: 0,
        errors,
    };
    let calls = grammar::root(&mut p);
    (calls, p.errors)
}

mod grammar {
    use super::*;

    pub(super) fn root(p: &mut Parser) -> Vec<Call> {
        let mut calls = Vec::new();
        while !p.at_end() {
            match call(p) {
                Some(c) => calls.push(c),
                None => p.recover(),
            }
        }
        calls
    }

    /// Ident ( Lit, Lit, ... ) ;
    fn call(p: &mut Parser) -> Option<Call> {
        let name = p.expect(Ident, "a shape name")?;
        p.expect(OpenRound, "`(`")?;
        let mut args = Vec::new();
        if !p.at(CloseRound) {
            loop {
                let lit = p.expect(Literal, "a number")?;
                args.push(p.number(lit)?);
                if !p.eat(Comma) {
                    break;
                }
            }
        }
        let close = p.expect(CloseRound, "`)`")?;
        // the last statement may leave off its semicolon
        if !p.at_end() {
            p.expect(SemiColon, "`;`")?;
        }
        Some(Call {
            name: p.text[name.range].to_owned(),
            args,
            range: name.range.cover(close.range),
        })
    }
}

pub(super) struct Parser<'t> {
    text: &'t str,
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<ScriptError>,
}

impl Parser<'_> {
    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn at(&self, kind: SyntaxKind) -> bool {
        self.current().map(|t| t.kind) == Some(kind)
    }

    fn bump(&mut self) -> Option<Token> {
        let tok = self.current()?;
        self.pos += 1;
        Some(tok)
    }

    fn eat(&mut self, kind: SyntaxKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: SyntaxKind, expected: &'static str) -> Option<Token> {
        if self.at(kind) {
            return self.bump();
        }
        let (range, found) = match self.current() {
            Some(tok) => (tok.range, format!("`{}`", &self.text[tok.range])),
            None => {
                let end = self.tokens.last().map(|t| t.range.end()).unwrap_or_default();
                (TextRange::new(end, end), String::from("end of input"))
            }
        };
        self.errors.push(ScriptError::Expected {
            range,
            expected,
            found,
        });
        None
    }

    fn number(&mut self, lit: Token) -> Option<f64> {
        let text = &self.text[lit.range];
        match text.replace('_', "").parse() {
            Ok(x) => Some(x),
            Err(_) => {
                self.errors.push(ScriptError::BadLiteral {
                    range: lit.range,
                    text: text.to_owned(),
                });
                None
            }
        }
    }

    /// Skip past the next semicolon.
    fn recover(&mut self) {
        while let Some(tok) = self.bump() {
            if tok.kind == SemiColon {
                break;
            }
        }
    }
}
