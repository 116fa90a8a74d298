//! Provides parsers for grid rows.

use crate::parsers::{ParseResult, Span};
use nom::bytes::complete::take_till1;
use nom::character::complete::{space0, space1};
use nom::multi::separated_list0;
use nom::sequence::delimited;

/// Parses a single whitespace delimited token. Tokens keep their location so
/// that errors can point at the offending cell.
///
/// ## Example
/// ```
/// # use fifteen::parsers::{parse_token, preamble::*};
/// let (rest, token) = parse_token("12 x").unwrap();
/// assert_eq!(*token.fragment(), "12");
/// assert_eq!(*rest.fragment(), " x");
///
/// assert!(parse_token(" 12").is_err());
///```
pub fn parse_token<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Span<'a>> {
    take_till1(|c: char| c.is_whitespace())(input.into())
}

/// Parses the tokens of one line, skipping spaces and tabs around and between
/// them. Stops at the line ending.
///
/// ## Example
/// ```
/// # use fifteen::parsers::{parse_row, preamble::*};
/// let (rest, tokens) = parse_row("  1\t2   x \n3").unwrap();
/// let tokens: Vec<&str> = tokens.iter().map(|token| *token.fragment()).collect();
/// assert_eq!(tokens, ["1", "2", "x"]);
/// assert_eq!(*rest.fragment(), "\n3");
///
/// let (_, tokens) = parse_row("\n").unwrap();
/// assert!(tokens.is_empty());
///```
pub fn parse_row<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Span<'a>>> {
    delimited(space0, separated_list0(space1, parse_token), space0)(input.into())
}
