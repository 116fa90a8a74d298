use crate::parsers::ParseResult;

/// Shorthand checks on parser output, mostly for doc tests.
pub trait UnwrapValue<T> {
    /// Whether the parser succeeded with `value`, ignoring remaining input.
    fn is_value(self, value: T) -> bool;

    /// Whether the parser succeeded with `value` and consumed all input.
    fn is_exactly(self, value: T) -> bool;
}

impl<'a, T: PartialEq> UnwrapValue<T> for ParseResult<'a, T> {
    fn is_value(self, value: T) -> bool {
        matches!(self, Ok((_, parsed)) if parsed == value)
    }

    fn is_exactly(self, value: T) -> bool {
        matches!(self, Ok((rest, parsed)) if rest.fragment().is_empty() && parsed == value)
    }
}
