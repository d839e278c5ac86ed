//! Tokenizer and Pratt parser for the preprocessed plain-math form.
//!
//! The grammar is deliberately small: numbers, the variable `x`, the
//! constants `pi` and `e`, parentheses, `+ - * / ^` (caret binds right),
//! unary minus, function calls, and implicit multiplication (`2x`,
//! `3(x+1)`). Anything else is a typed [`ParseError`]; mid-edit markup
//! routinely fails here and the caller degrades to "no curve drawn".

use thiserror::Error;

use super::expr::{Expr, MathFn};

/// Why an expression failed to parse. Never fatal to the editor.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character `{ch}` at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unexpected `{0}`")]
    UnexpectedToken(String),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("unknown function `{0}`")]
    UnknownFunction(String),
    #[error("`{function}` takes {expected} argument(s), found {found}")]
    WrongArgumentCount {
        function: &'static str,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    Num(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Caret,
    LParen,
    RParen,
    Comma,
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Ident(s) => s.clone(),
            Self::Plus => "+".into(),
            Self::Minus => "-".into(),
            Self::Star => "*".into(),
            Self::Slash => "/".into(),
            Self::Caret => "^".into(),
            Self::LParen => "(".into(),
            Self::RParen => ")".into(),
            Self::Comma => ",".into(),
        }
    }
}

fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        match ch {
            ' ' | '\t' => i += 1,
            '+' => {
                tokens.push(Token::Plus);
                i += 1;
            }
            '-' => {
                tokens.push(Token::Minus);
                i += 1;
            }
            '*' => {
                tokens.push(Token::Star);
                i += 1;
            }
            '/' => {
                tokens.push(Token::Slash);
                i += 1;
            }
            '^' => {
                tokens.push(Token::Caret);
                i += 1;
            }
            '(' => {
                tokens.push(Token::LParen);
                i += 1;
            }
            ')' => {
                tokens.push(Token::RParen);
                i += 1;
            }
            ',' => {
                tokens.push(Token::Comma);
                i += 1;
            }
            '0'..='9' | '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                let text: String = chars[start..i].iter().collect();
                let value = text
                    .parse::<f64>()
                    .map_err(|_| ParseError::UnexpectedChar { ch, pos: start })?;
                tokens.push(Token::Num(value));
            }
            'a'..='z' | 'A'..='Z' => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                tokens.push(Token::Ident(chars[start..i].iter().collect()));
            }
            _ => return Err(ParseError::UnexpectedChar { ch, pos: i }),
        }
    }
    Ok(tokens)
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<Token> {
        let t = self.tokens.get(self.pos).cloned();
        if t.is_some() {
            self.pos += 1;
        }
        t
    }

    fn expect(&mut self, want: &Token) -> Result<(), ParseError> {
        match self.next() {
            Some(t) if t == *want => Ok(()),
            Some(t) => Err(ParseError::UnexpectedToken(t.describe())),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    /// Pratt loop. `min_bp` is the minimum binding power to continue.
    fn parse_expr(&mut self, min_bp: u8) -> Result<Expr, ParseError> {
        let mut lhs = self.parse_prefix()?;

        loop {
            let (op, l_bp, r_bp) = match self.peek() {
                Some(Token::Plus) => (Op::Add, 1, 2),
                Some(Token::Minus) => (Op::Sub, 1, 2),
                Some(Token::Star) => (Op::Mul, 3, 4),
                Some(Token::Slash) => (Op::Div, 3, 4),
                // right-associative
                Some(Token::Caret) => (Op::Pow, 8, 7),
                // implicit multiplication: `2x`, `3(x+1)`, `x sin(x)`
                Some(Token::Num(_) | Token::Ident(_) | Token::LParen) => (Op::ImplicitMul, 3, 4),
                _ => break,
            };
            if l_bp < min_bp {
                break;
            }
            if op != Op::ImplicitMul {
                self.next();
            }
            let rhs = self.parse_expr(r_bp)?;
            lhs = match op {
                Op::Add => Expr::Add(Box::new(lhs), Box::new(rhs)),
                Op::Sub => Expr::Sub(Box::new(lhs), Box::new(rhs)),
                Op::Mul | Op::ImplicitMul => Expr::Mul(Box::new(lhs), Box::new(rhs)),
                Op::Div => Expr::Div(Box::new(lhs), Box::new(rhs)),
                Op::Pow => Expr::Pow(Box::new(lhs), Box::new(rhs)),
            };
        }
        Ok(lhs)
    }

    fn parse_prefix(&mut self) -> Result<Expr, ParseError> {
        match self.next() {
            Some(Token::Num(n)) => Ok(Expr::Num(n)),
            Some(Token::Minus) => {
                // unary minus binds tighter than * but looser than ^
                let inner = self.parse_expr(6)?;
                Ok(Expr::Neg(Box::new(inner)))
            }
            Some(Token::LParen) => {
                let inner = self.parse_expr(0)?;
                self.expect(&Token::RParen)?;
                Ok(inner)
            }
            Some(Token::Ident(name)) => self.parse_ident(&name),
            Some(t) => Err(ParseError::UnexpectedToken(t.describe())),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    fn parse_ident(&mut self, name: &str) -> Result<Expr, ParseError> {
        match name {
            "x" => return Ok(Expr::Var),
            "pi" => return Ok(Expr::Num(std::f64::consts::PI)),
            "e" => return Ok(Expr::Num(std::f64::consts::E)),
            _ => {}
        }

        let (function, fn_name): (MathFn, &'static str) = match name {
            "sin" => (MathFn::Sin, "sin"),
            "cos" => (MathFn::Cos, "cos"),
            "tan" => (MathFn::Tan, "tan"),
            "sqrt" => (MathFn::Sqrt, "sqrt"),
            "log" => (MathFn::Log, "log"),
            "abs" => (MathFn::Abs, "abs"),
            _ => return Err(ParseError::UnknownFunction(name.to_string())),
        };

        self.expect(&Token::LParen)?;
        let mut args = vec![self.parse_expr(0)?];
        while self.peek() == Some(&Token::Comma) {
            self.next();
            args.push(self.parse_expr(0)?);
        }
        self.expect(&Token::RParen)?;

        if args.len() != function.arity() {
            return Err(ParseError::WrongArgumentCount {
                function: fn_name,
                expected: function.arity(),
                found: args.len(),
            });
        }
        Ok(Expr::Call(function, args))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    ImplicitMul,
}

/// Parse a preprocessed plain-math expression.
///
/// # Errors
///
/// A [`ParseError`] describing the first problem found; the input is
/// never partially consumed into a wrong result (trailing tokens are
/// rejected).
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    let mut parser = Parser { tokens, pos: 0 };
    let expr = parser.parse_expr(0)?;
    match parser.next() {
        None => Ok(expr),
        Some(t) => Err(ParseError::UnexpectedToken(t.describe())),
    }
}
