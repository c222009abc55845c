//! Closed enumerations with explicit token tables.
//!
//! Content files name enumeration variants by token (`WEAPON`, `DAWN`, ...).
//! Each enumeration lists its variants in [`Token::ALL`] and spells each
//! variant in an exhaustive [`Token::as_token`] match, so adding a variant
//! without a token fails to compile.

use crate::error::UnknownToken;

/// A closed enumeration addressable by token string.
pub trait Token: Copy + Eq + Sized + 'static {
    /// Human-readable name of the enumeration, used in diagnostics.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The token that names this variant in content files.
    fn as_token(self) -> &'static str;

    /// Looks up the variant named by `token`.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownToken`] if no variant is named `token`.
    fn from_token(token: &str) -> Result<Self, UnknownToken> {
        let token = token.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_token() == token)
            .ok_or_else(|| UnknownToken {
                kind: Self::KIND,
                token: token.to_string(),
            })
    }
}
