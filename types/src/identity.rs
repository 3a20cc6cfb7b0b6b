//! Caller identity type, rendered as `0x`-prefixed hex.

use crate::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An authenticated caller identity: a 20-byte account address.
///
/// The registry never verifies signatures itself. Every call arrives with an
/// identity the host has already authenticated.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Identity([u8; 20]);

impl Identity {
    /// The standard prefix used when rendering identities.
    pub const PREFIX: &'static str = "0x";

    pub const LEN: usize = 20;

    pub fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Parse an identity from hex, with or without the `0x` prefix.
    pub fn parse(raw: &str) -> Result<Self, TypesError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix(Self::PREFIX).unwrap_or(trimmed);
        let decoded =
            hex::decode(digits).map_err(|e| TypesError::InvalidIdentity(format!("{raw}: {e}")))?;
        let bytes: [u8; 20] = decoded.try_into().map_err(|v: Vec<u8>| {
            TypesError::InvalidIdentity(format!(
                "{raw}: expected {} bytes, got {}",
                Self::LEN,
                v.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Identity({self})")
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, hex::encode(self.0))
    }
}

impl FromStr for Identity {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_prefixed_lowercase_hex() {
        let id = Identity::new([0xab; 20]);
        assert_eq!(id.to_string(), format!("0x{}", "ab".repeat(20)));
    }

    #[test]
    fn parse_accepts_optional_prefix() {
        let raw = "11".repeat(20);
        let with = Identity::parse(&format!("0x{raw}")).unwrap();
        let without = Identity::parse(&raw).unwrap();
        assert_eq!(with, without);
        assert_eq!(with.as_bytes(), &[0x11; 20]);
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = Identity::parse("0xabcd").unwrap_err();
        assert!(matches!(err, TypesError::InvalidIdentity(_)));
    }

    #[test]
    fn parse_rejects_non_hex() {
        let raw = format!("0x{}", "zz".repeat(20));
        assert!(Identity::parse(&raw).is_err());
    }
}
