//! Edge sign module

use std::fmt;

/// The state of a relationship between two nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    /// Positive relationship, written `++`
    Friendly,

    /// Negative relationship, written `--`
    Hostile,
}

impl Sign {
    /// Separator token used in the edge list
    pub fn token(self) -> &'static str {
        match self {
            Sign::Friendly => "++",
            Sign::Hostile => "--",
        }
    }

    /// Multiplicative value (+1 friendly, -1 hostile)
    ///
    /// # Examples
    ///
    /// ```
    /// use accord_graph::Sign;
    ///
    /// let product = Sign::Hostile.value() * Sign::Hostile.value() * Sign::Friendly.value();
    /// assert_eq!(product, 1);
    /// ```
    pub fn value(self) -> i8 {
        match self {
            Sign::Friendly => 1,
            Sign::Hostile => -1,
        }
    }

    /// Whether this is a friendly sign
    pub fn is_friendly(self) -> bool {
        matches!(self, Sign::Friendly)
    }

    /// Whether this is a hostile sign
    pub fn is_hostile(self) -> bool {
        matches!(self, Sign::Hostile)
    }
}

impl From<bool> for Sign {
    fn from(friendly: bool) -> Self {
        if friendly {
            Sign::Friendly
        } else {
            Sign::Hostile
        }
    }
}

impl From<Sign> for bool {
    fn from(sign: Sign) -> Self {
        sign.is_friendly()
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
