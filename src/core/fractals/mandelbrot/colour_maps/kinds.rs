use std::fmt;
use std::str::FromStr;

use crate::error::InvalidParameter;

const REVERSED_SUFFIX: &str = "_r";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColourMapKind {
    #[default]
    Magma,
    Inferno,
    Viridis,
    Hot,
    Gray,
    FireGradient,
    BlueWhiteGradient,
}

impl ColourMapKind {
    pub const ALL: &'static [Self] = &[
        Self::Magma,
        Self::Inferno,
        Self::Viridis,
        Self::Hot,
        Self::Gray,
        Self::FireGradient,
        Self::BlueWhiteGradient,
    ];

    /// Lookup name accepted on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Magma => "magma",
            Self::Inferno => "inferno",
            Self::Viridis => "viridis",
            Self::Hot => "hot",
            Self::Gray => "gray",
            Self::FireGradient => "fire",
            Self::BlueWhiteGradient => "blue_white",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Magma => "Magma",
            Self::Inferno => "Inferno",
            Self::Viridis => "Viridis",
            Self::Hot => "Hot",
            Self::Gray => "Gray",
            Self::FireGradient => "Fire gradient",
            Self::BlueWhiteGradient => "Blue-white gradient",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "grey" => Some(Self::Gray),
            _ => Self::ALL.iter().copied().find(|kind| kind.name() == name),
        }
    }
}

impl fmt::Display for ColourMapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A palette plus its direction, parsed from names such as `magma` or `hot_r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColourMapSelection {
    pub kind: ColourMapKind,
    pub reversed: bool,
}

impl ColourMapSelection {
    #[must_use]
    pub const fn new(kind: ColourMapKind) -> Self {
        Self {
            kind,
            reversed: false,
        }
    }

    #[must_use]
    pub const fn reversed(kind: ColourMapKind) -> Self {
        Self {
            kind,
            reversed: true,
        }
    }

    fn known_names() -> String {
        ColourMapKind::ALL
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ColourMapSelection {
    type Err = InvalidParameter;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalised = name.trim().to_ascii_lowercase();
        let (base, reversed) = match normalised.strip_suffix(REVERSED_SUFFIX) {
            Some(base) => (base, true),
            None => (normalised.as_str(), false),
        };

        ColourMapKind::from_name(base)
            .map(|kind| Self { kind, reversed })
            .ok_or_else(|| InvalidParameter::UnknownColourMap {
                name: name.to_string(),
                known: Self::known_names(),
            })
    }
}

impl fmt::Display for ColourMapSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.name())?;
        if self.reversed {
            f.write_str(REVERSED_SUFFIX)?;
        }
        Ok(())
    }
}
