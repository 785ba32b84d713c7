/// Symbolic values from a constrained domain, e.g. protocol identifiers.
///
/// A symbol should only contain ASCII characters; the encoder rejects
/// anything else. The wrapper is over a `String` so that a decoded general
/// string can be retagged without copying.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(pub String);

impl Symbol {
    /// Creates a new [`Symbol`]
    pub fn new(val: impl Into<String>) -> Self {
        Self(val.into())
    }

    /// Consume the wrapper into the inner String
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get a reference to the inner str
    pub fn as_str(&self) -> &str {
        &self.0[..]
    }
}

impl From<String> for Symbol {
    fn from(val: String) -> Self {
        Self(val)
    }
}

impl From<&str> for Symbol {
    fn from(val: &str) -> Self {
        Self(val.into())
    }
}
