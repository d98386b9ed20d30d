//! Symbolic variable atoms.

use std::fmt;
use std::sync::Arc;

/// A named symbolic variable.
///
/// Cloning is cheap (the name is shared), and equality, ordering and
/// hashing follow the name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol with the given name.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(Arc::from(name))
    }

    /// Returns the symbol's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_identity() {
        let x = Symbol::new("x");
        let x2 = Symbol::new("x");
        let y = Symbol::new("y");
        assert_eq!(x, x2);
        assert_ne!(x, y);
        assert!(x < y);
    }
}
