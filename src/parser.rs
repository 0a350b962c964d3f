use crate::error::{CramerError, MalformedReason, Result};
use crate::scalar::Scalar;
use nom::IResult;
use nom::branch::alt;
use nom::character::complete::{char, digit0, one_of};
use nom::combinator::{all_consuming, opt, recognize, value};
use nom::error::VerboseError;
use nom::sequence::{pair, tuple};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variable {
    X,
    Y,
    Z,
}

impl Variable {
    pub const ALL: [Variable; 3] = [Variable::X, Variable::Y, Variable::Z];

    pub fn index(self) -> usize {
        match self {
            Variable::X => 0,
            Variable::Y => 1,
            Variable::Z => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Variable::X => "x",
            Variable::Y => "y",
            Variable::Z => "z",
        }
    }
}

/// One coefficient per variable; absent variables stay at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Coefficients<T = f64> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Coefficients<T> {
    pub fn get(&self, var: Variable) -> &T {
        match var {
            Variable::X => &self.x,
            Variable::Y => &self.y,
            Variable::Z => &self.z,
        }
    }

    pub fn to_row(&self) -> [T; 3] {
        [self.x.clone(), self.y.clone(), self.z.clone()]
    }

    fn set(&mut self, var: Variable, coeff: T) {
        match var {
            Variable::X => self.x = coeff,
            Variable::Y => self.y = coeff,
            Variable::Z => self.z = coeff,
        }
    }
}

impl<T: Scalar> Default for Coefficients<T> {
    fn default() -> Self {
        Self {
            x: T::zero(),
            y: T::zero(),
            z: T::zero(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParsedEquation<T = f64> {
    pub coefficients: Coefficients<T>,
    pub constant: T,
}

/// Parse `<term>...=<number>` where each term is `[sign][coefficient]<x|y|z>`.
///
/// Whitespace is stripped first. The left-hand side is scanned for terms and anything
/// that does not have the term shape is skipped. A repeated variable keeps the last
/// coefficient seen, it is not summed. The right-hand side must be a single decimal
/// literal.
pub fn parse_equation<T: Scalar>(input: &str) -> Result<ParsedEquation<T>> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let (lhs, rhs) = compact
        .split_once('=')
        .ok_or_else(|| CramerError::malformed(input, MalformedReason::MissingEquals))?;

    let mut coefficients = Coefficients::default();
    let terms = scan_terms(lhs);
    for &(literal, var) in &terms {
        let coeff = coefficient_value::<T>(literal).ok_or_else(|| {
            CramerError::malformed(
                input,
                MalformedReason::InvalidCoefficient(format!("{literal}{}", var.symbol())),
            )
        })?;
        coefficients.set(var, coeff);
    }

    let constant =
        parse_constant::<T>(rhs).map_err(|reason| CramerError::malformed(input, reason))?;
    tracing::trace!(equation = %compact, terms = terms.len(), "parsed equation");

    Ok(ParsedEquation {
        coefficients,
        constant,
    })
}

/// Collect every `[sign][digits][.digits]<var>` match, left to right, without overlap.
fn scan_terms(mut rest: &str) -> Vec<(&str, Variable)> {
    let mut terms = Vec::new();
    while !rest.is_empty() {
        match term(rest) {
            Ok((next, found)) => {
                terms.push(found);
                rest = next;
            }
            Err(_) => {
                let mut chars = rest.chars();
                chars.next();
                rest = chars.as_str();
            }
        }
    }
    terms
}

fn coefficient_value<T: Scalar>(literal: &str) -> Option<T> {
    match literal {
        "" | "+" => Some(T::one()),
        "-" => Some(-T::one()),
        _ => T::from_decimal(literal),
    }
}

fn parse_constant<T: Scalar>(rhs: &str) -> std::result::Result<T, MalformedReason> {
    if rhs.is_empty() {
        return Err(MalformedReason::MissingConstant);
    }
    all_consuming(decimal_literal)(rhs)
        .ok()
        .and_then(|(_, literal)| T::from_decimal(literal))
        .ok_or_else(|| MalformedReason::InvalidConstant(rhs.to_string()))
}

fn term(input: &str) -> IResult<&str, (&str, Variable), VerboseError<&str>> {
    pair(decimal_literal, variable)(input)
}

/// Optional sign, then digits with an optional decimal point. May match nothing.
fn decimal_literal(input: &str) -> IResult<&str, &str, VerboseError<&str>> {
    recognize(tuple((opt(one_of("+-")), digit0, opt(char('.')), digit0)))(input)
}

fn variable(input: &str) -> IResult<&str, Variable, VerboseError<&str>> {
    alt((
        value(Variable::X, char('x')),
        value(Variable::Y, char('y')),
        value(Variable::Z, char('z')),
    ))(input)
}
