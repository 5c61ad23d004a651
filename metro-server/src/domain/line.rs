//! Line label type.

use std::fmt;
use std::sync::Arc;

/// The label of the physical line a connection belongs to (e.g. "Yellow").
///
/// Lines are only ever compared for equality: a change of label between two
/// consecutive hops is what counts as an interchange. The label is stored
/// trimmed. A blank label is accepted and is simply a line like any other.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct LineId(Arc<str>);

impl LineId {
    /// Create a line label, trimming surrounding whitespace.
    pub fn new(s: &str) -> Self {
        LineId(Arc::from(s.trim()))
    }

    /// Returns the line label as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.as_str())
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
