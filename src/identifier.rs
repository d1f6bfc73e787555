//! Prefixed identifiers: one prefix byte followed by a 32-byte key.
//!
//! Text form is 66 lowercase hex characters (`05…`, `15…`, `25…`). A bare
//! 64-character key parses as a Session ID.

use core::convert::TryFrom;
use core::fmt;
use core::str::FromStr;
use crate::{
    errors::BlindingError,
    types::{BlindedId, SessionId, KEY_HEX_LEN, KEY_LEN, PREFIX_BLINDED_15, PREFIX_BLINDED_25, PREFIX_SESSION},
};

pub const IDENTIFIER_LEN: usize = 1 + KEY_LEN;
pub const IDENTIFIER_HEX_LEN: usize = 2 * IDENTIFIER_LEN;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdPrefix {
    /// Unblinded Session ID (Montgomery key)
    Session,
    /// Legacy blinded ID
    Blinded15,
    /// Session-bound blinded ID
    Blinded25,
}

impl IdPrefix {
    #[must_use]
    pub const fn byte(self) -> u8 {
        match self {
            Self::Session => PREFIX_SESSION,
            Self::Blinded15 => PREFIX_BLINDED_15,
            Self::Blinded25 => PREFIX_BLINDED_25,
        }
    }
}

impl TryFrom<u8> for IdPrefix {
    type Error = BlindingError;
    fn try_from(b: u8) -> Result<Self, Self::Error> {
        match b {
            PREFIX_SESSION => Ok(Self::Session),
            PREFIX_BLINDED_15 => Ok(Self::Blinded15),
            PREFIX_BLINDED_25 => Ok(Self::Blinded25),
            other => Err(BlindingError::UnknownPrefix(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier {
    prefix: IdPrefix,
    key: [u8; KEY_LEN],
}

impl Identifier {
    #[must_use]
    pub const fn new(prefix: IdPrefix, key: [u8; KEY_LEN]) -> Self {
        Self { prefix, key }
    }

    #[must_use]
    pub const fn session(id: SessionId) -> Self {
        Self::new(IdPrefix::Session, id.0)
    }

    #[must_use]
    pub const fn blinded_15(id: BlindedId) -> Self {
        Self::new(IdPrefix::Blinded15, id.0)
    }

    #[must_use]
    pub const fn blinded_25(id: BlindedId) -> Self {
        Self::new(IdPrefix::Blinded25, id.0)
    }

    #[must_use]
    pub const fn prefix(&self) -> IdPrefix {
        self.prefix
    }

    #[must_use]
    pub const fn key(&self) -> &[u8; KEY_LEN] {
        &self.key
    }

    #[must_use]
    pub fn to_bytes(&self) -> [u8; IDENTIFIER_LEN] {
        let mut out = [0u8; IDENTIFIER_LEN];
        out[0] = self.prefix.byte();
        out[1..].copy_from_slice(&self.key);
        out
    }

    /// The payload as a Session ID.
    ///
    /// # Errors
    ///
    /// Returns `BlindingError::UnexpectedPrefix` unless the prefix is `05`.
    pub fn session_id(&self) -> Result<SessionId, BlindingError> {
        self.expect_prefix(IdPrefix::Session).map(|()| SessionId(self.key))
    }

    /// The payload as a blinded ID (`15` or `25`).
    ///
    /// # Errors
    ///
    /// Returns `BlindingError::UnexpectedPrefix` for a `05` identifier.
    pub fn blinded_id(&self) -> Result<BlindedId, BlindingError> {
        match self.prefix {
            IdPrefix::Blinded15 | IdPrefix::Blinded25 => Ok(BlindedId(self.key)),
            IdPrefix::Session => Err(BlindingError::UnexpectedPrefix {
                expected: PREFIX_BLINDED_15,
                got: PREFIX_SESSION,
            }),
        }
    }

    /// The payload as a legacy blinded ID. Only `15` identifiers can be unblinded.
    ///
    /// # Errors
    ///
    /// Returns `BlindingError::UnexpectedPrefix` unless the prefix is `15`.
    pub fn legacy_blinded_id(&self) -> Result<BlindedId, BlindingError> {
        self.expect_prefix(IdPrefix::Blinded15).map(|()| BlindedId(self.key))
    }

    fn expect_prefix(&self, expected: IdPrefix) -> Result<(), BlindingError> {
        if self.prefix == expected {
            Ok(())
        } else {
            Err(BlindingError::UnexpectedPrefix { expected: expected.byte(), got: self.prefix.byte() })
        }
    }
}

impl TryFrom<&[u8]> for Identifier {
    type Error = BlindingError;
    fn try_from(b: &[u8]) -> Result<Self, Self::Error> {
        if b.len() != IDENTIFIER_LEN {
            return Err(BlindingError::InvalidLength { expected: IDENTIFIER_LEN, got: b.len() });
        }
        let prefix = IdPrefix::try_from(b[0])?;
        let mut key = [0u8; KEY_LEN];
        key.copy_from_slice(&b[1..]);
        Ok(Self { prefix, key })
    }
}

impl FromStr for Identifier {
    type Err = BlindingError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.len() {
            IDENTIFIER_HEX_LEN => {
                let mut raw = [0u8; IDENTIFIER_LEN];
                hex::decode_to_slice(s, &mut raw)?;
                Self::try_from(&raw[..])
            }
            KEY_HEX_LEN => s.parse::<SessionId>().map(Self::session),
            got => Err(BlindingError::InvalidLength { expected: IDENTIFIER_HEX_LEN, got }),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.to_bytes()))
    }
}

impl From<SessionId> for Identifier {
    fn from(id: SessionId) -> Self {
        Self::session(id)
    }
}
