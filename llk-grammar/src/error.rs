use std::fmt;

/// A single line that could not be parsed as a rule.
///
/// Malformed lines are non-fatal: the offending line is discarded and
/// parsing continues with the rest of the grammar text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MalformedLine {
    pub source: String,
    pub line: usize,
    pub text: String,
}

impl fmt::Display for MalformedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: malformed rule: {}", self.source, self.line, self.text)
    }
}

/// Fatal errors building a [`Grammar`](crate::Grammar).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GrammarError {
    /// No rule survived parsing; there is nothing to analyze.
    EmptyGrammar { source: String },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::EmptyGrammar { source } => {
                write!(f, "{}: grammar has no usable rules", source)
            }
        }
    }
}

impl std::error::Error for GrammarError {}
