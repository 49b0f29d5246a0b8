//! Input line tokenization.
//!
//! Splits a raw input line into a command word and argument words.

/// A tokenized input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputLine<'a> {
    /// The command word (first whitespace-delimited token).
    pub command: &'a str,
    /// The argument words, in order.
    pub arguments: Vec<&'a str>,
}

impl<'a> InputLine<'a> {
    /// Tokenizes a raw input line.
    ///
    /// Splits on runs of whitespace. Runs never produce empty tokens, so an
    /// argument written as only spaces is absent rather than empty. Returns
    /// `None` for a line with no words at all.
    #[must_use]
    pub fn parse(input: &'a str) -> Option<Self> {
        let mut words = input.split_whitespace();
        let command = words.next()?;

        Some(Self {
            command,
            arguments: words.collect(),
        })
    }
}
