//! Role-tagged chain specializations handed around by the framer.
//!
//! Both tokens are plain chains underneath; the types only encode which
//! side of a `name=payload` pair the bytes came from, plus the one behavior
//! that differs per role.

use core::fmt;
use core::ops::{Deref, DerefMut};

use crate::chain::Chain;
use crate::error::Result;

/// A literal payload token.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Value(Chain);

impl Value {
    #[must_use]
    pub fn new() -> Self {
        Self(Chain::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Chain::with_capacity(capacity))
    }

    #[must_use]
    pub fn into_chain(self) -> Chain {
        self.0
    }
}

/// A name token.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct Alias(Chain);

impl Alias {
    #[must_use]
    pub fn new() -> Self {
        Self(Chain::new())
    }

    #[must_use]
    pub fn into_chain(self) -> Chain {
        self.0
    }

    /// Strips one trailing `terminator` byte if present, the framer's way of
    /// closing a name token without copying. Returns whether a byte went.
    ///
    /// # Errors
    /// [`crate::Error::Fixed`] on a sealed chain.
    pub fn seal(&mut self, terminator: u8) -> Result<bool> {
        if self.0.get(-1) == Some(terminator) {
            self.0.truncate(self.0.len() - 1)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

macro_rules! token_impls {
    ($token:ty) => {
        impl Deref for $token {
            type Target = Chain;

            fn deref(&self) -> &Chain {
                &self.0
            }
        }

        impl DerefMut for $token {
            fn deref_mut(&mut self) -> &mut Chain {
                &mut self.0
            }
        }

        impl From<Chain> for $token {
            fn from(chain: Chain) -> Self {
                Self(chain)
            }
        }

        impl From<&str> for $token {
            fn from(text: &str) -> Self {
                Self(Chain::from(text))
            }
        }

        impl From<&[u8]> for $token {
            fn from(data: &[u8]) -> Self {
                Self(Chain::from(data))
            }
        }

        impl fmt::Display for $token {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

token_impls!(Value);
token_impls!(Alias);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_is_a_chain_with_a_role() {
        let mut value = Value::from("12");
        value.concat_byte(b'3').unwrap();
        assert_eq!(value.to_int(0), 123);
    }

    #[test]
    fn alias_seal_strips_one_terminator() {
        let mut alias = Alias::from("name:");
        assert!(alias.seal(b':').unwrap());
        assert!(alias.is_str("name"));
        assert!(!alias.seal(b':').unwrap());
        assert!(alias.is_str("name"));
    }
}
