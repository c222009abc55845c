//! Value types produced by the record field decoders.

use std::fmt;

use dungeon_foundation::Token;

/// An RGB display colour.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Creates a colour from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// How easily something can be seen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Visibility {
    /// Never seen without special means.
    Hidden,
    /// Seen only in good light.
    Faint,
    /// Seen in ordinary light.
    #[default]
    Visible,
    /// Seen even in near darkness.
    Obvious,
}

impl Token for Visibility {
    const KIND: &'static str = "visibility";
    const ALL: &'static [Self] = &[Self::Hidden, Self::Faint, Self::Visible, Self::Obvious];

    fn as_token(self) -> &'static str {
        match self {
            Self::Hidden => "HIDDEN",
            Self::Faint => "FAINT",
            Self::Visible => "VISIBLE",
            Self::Obvious => "OBVIOUS",
        }
    }
}

/// How much light something gives off.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Luminosity {
    /// No light.
    Dark,
    /// A faint glow.
    Dim,
    /// Enough to see nearby things.
    Lit,
    /// Lights a whole location.
    Bright,
    /// As bright as daylight.
    Blazing,
}

impl Token for Luminosity {
    const KIND: &'static str = "luminosity";
    const ALL: &'static [Self] = &[
        Self::Dark,
        Self::Dim,
        Self::Lit,
        Self::Bright,
        Self::Blazing,
    ];

    fn as_token(self) -> &'static str {
        match self {
            Self::Dark => "DARK",
            Self::Dim => "DIM",
            Self::Lit => "LIT",
            Self::Bright => "BRIGHT",
            Self::Blazing => "BLAZING",
        }
    }
}
