use std::collections::BTreeMap;

use nom::branch::alt;
use nom::bytes::complete::take_till;
use nom::character::complete::{alpha1, char, digit0, digit1, multispace0};
use nom::combinator::{all_consuming, map, map_res, opt, recognize};
use nom::error::VerboseError;
use nom::multi::{many0, many1};
use nom::number::complete::recognize_float;
use nom::sequence::{delimited, pair, tuple};
use nom::IResult;
use serde::{Deserialize, Serialize};

use crate::equation::ParsedEquation;
use crate::error::{ParseError, ParseErrorKind};

/// What to do with a left-hand term that is not `[sign][number]letters`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermPolicy {
    /// Reject the equation with [`ParseErrorKind::MalformedTerm`].
    #[default]
    Strict,
    /// Skip the term and keep parsing the rest of the equation.
    Lenient,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParseOptions {
    pub terms: TermPolicy,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self {
            terms: TermPolicy::Strict,
        }
    }

    pub fn lenient() -> Self {
        Self {
            terms: TermPolicy::Lenient,
        }
    }
}

/// Parse `"<terms> = <number>"` with strict term handling.
pub fn parse_equation(input: &str) -> Result<ParsedEquation, ParseError> {
    parse_equation_with(input, &ParseOptions::default())
}

pub fn parse_equation_with(
    input: &str,
    options: &ParseOptions,
) -> Result<ParsedEquation, ParseError> {
    let (lhs, rhs) = match input.matches('=').count() {
        0 => return Err(ParseError::new(input, ParseErrorKind::MissingEquals)),
        1 => input
            .split_once('=')
            .ok_or_else(|| ParseError::new(input, ParseErrorKind::MissingEquals))?,
        n => return Err(ParseError::new(input, ParseErrorKind::MultipleEquals(n))),
    };

    if lhs.trim().is_empty() {
        return Err(ParseError::new(input, ParseErrorKind::EmptyLeftSide));
    }

    let constant = parse_constant(rhs).ok_or_else(|| {
        ParseError::new(
            input,
            ParseErrorKind::InvalidConstant {
                text: rhs.trim().to_string(),
            },
        )
    })?;

    let chunks = match signed_chunks(lhs) {
        Ok((_, chunks)) => chunks,
        Err(_) => {
            return Err(ParseError::new(
                input,
                ParseErrorKind::MalformedTerm {
                    term: lhs.trim().to_string(),
                },
            ))
        }
    };

    let mut coefficients: BTreeMap<String, f64> = BTreeMap::new();
    for (sign, body) in chunks {
        match parse_term(body) {
            Some((magnitude, variable)) => {
                *coefficients.entry(variable.to_string()).or_insert(0.0) += sign * magnitude;
            }
            None => match options.terms {
                TermPolicy::Strict => {
                    return Err(ParseError::new(
                        input,
                        ParseErrorKind::MalformedTerm {
                            term: body.trim().to_string(),
                        },
                    ))
                }
                TermPolicy::Lenient => {
                    log::warn!("dropping term `{}` from `{}`", body.trim(), input.trim());
                }
            },
        }
    }

    Ok(ParsedEquation::new(input.trim(), coefficients, constant))
}

fn parse_constant(input: &str) -> Option<f64> {
    let (_, text) = all_consuming(ws(recognize_float::<&str, VerboseError<&str>>))(input).ok()?;
    finite(text)
}

fn finite(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Splits a left-hand side into `(sign, body)` pairs. Runs of signs multiply,
/// so `x - -y` yields `(1, "x")` and `(1, "y")`.
fn signed_chunks(input: &str) -> IResult<&str, Vec<(f64, &str)>, VerboseError<&str>> {
    let (rest, lead) = many0(ws(sign))(input)?;
    let (rest, first) = take_till(is_sign)(rest)?;
    let (rest, others) = all_consuming(many0(pair(many1(ws(sign)), take_till(is_sign))))(rest)?;

    let mut chunks = Vec::with_capacity(others.len() + 1);
    chunks.push((lead.iter().product::<f64>(), first));
    chunks.extend(
        others
            .into_iter()
            .map(|(signs, body)| (signs.iter().product::<f64>(), body)),
    );
    Ok((rest, chunks))
}

/// `[number] ['*'] letters`, returning the unsigned magnitude (1 when omitted).
fn parse_term(body: &str) -> Option<(f64, &str)> {
    let (_, (magnitude, _, variable)) = all_consuming(tuple((
        opt(ws(coefficient)),
        opt(ws(char('*'))),
        ws(alpha1),
    )))(body)
    .ok()?;
    Some((magnitude.unwrap_or(1.0), variable))
}

fn coefficient(input: &str) -> IResult<&str, f64, VerboseError<&str>> {
    map_res(
        recognize(alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        ))),
        |text: &str| finite(text).ok_or("coefficient out of range"),
    )(input)
}

fn sign(input: &str) -> IResult<&str, f64, VerboseError<&str>> {
    alt((map(char('+'), |_| 1.0), map(char('-'), |_| -1.0)))(input)
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>
where
    F: FnMut(&'a str) -> IResult<&'a str, O, VerboseError<&'a str>>,
{
    delimited(multispace0, inner, multispace0)
}
