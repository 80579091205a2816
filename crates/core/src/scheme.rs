//! Scheme kinds and their angular offsets around the wheel.

use crate::error::WheelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named harmony pattern relative to a base hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemeKind {
    /// Base and its opposite.
    Complementary,
    /// Three hues 120 degrees apart.
    Triad,
    /// Base flanked by its two neighbours.
    Analogous,
    /// Four hues 90 degrees apart.
    Square,
    /// Base plus the two neighbours of its complement.
    SplitComplementary,
    /// Two complementary pairs 60 degrees apart (tetrad).
    Rectangle,
    /// The base hue's shade sequence, light to dark.
    Monochromatic,
}

impl SchemeKind {
    /// All kinds, in listing order.
    pub const ALL: [SchemeKind; 7] = [
        Self::Complementary,
        Self::Triad,
        Self::Analogous,
        Self::Square,
        Self::SplitComplementary,
        Self::Rectangle,
        Self::Monochromatic,
    ];

    /// Stable identifier, matching the serde representation.
    pub fn id(self) -> &'static str {
        match self {
            Self::Complementary => "complementary",
            Self::Triad => "triad",
            Self::Analogous => "analogous",
            Self::Square => "square",
            Self::SplitComplementary => "split_complementary",
            Self::Rectangle => "rectangle",
            Self::Monochromatic => "monochromatic",
        }
    }

    /// Human-readable label for menus and image captions.
    pub fn label(self) -> &'static str {
        match self {
            Self::Complementary => "Complementary (opposite colors)",
            Self::Triad => "Triad (3 evenly spaced colors)",
            Self::Analogous => "Analogous (neighbouring colors)",
            Self::Square => "Square (4 colors 90° apart)",
            Self::SplitComplementary => "Split complementary",
            Self::Rectangle => "Rectangle (tetrad)",
            Self::Monochromatic => "Monochromatic (shades of one hue)",
        }
    }

    /// Angular offsets in degrees from the base position, in output order.
    ///
    /// Offset `0` marks the slot filled by the requested base color itself.
    /// Monochromatic is not angular and has no offsets.
    pub fn offsets(self) -> &'static [i32] {
        match self {
            Self::Complementary => &[0, 180],
            Self::Triad => &[0, 120, 240],
            Self::Analogous => &[-30, 0, 30],
            Self::Square => &[0, 90, 180, 270],
            Self::SplitComplementary => &[0, 150, 210],
            Self::Rectangle => &[0, 60, 180, 240],
            Self::Monochromatic => &[],
        }
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SchemeKind {
    type Err = WheelError;

    /// Accepts identifiers in any case, with `-` or spaces in place of `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.id() == id)
            .ok_or_else(|| WheelError::UnknownScheme(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_id() {
        for kind in SchemeKind::ALL {
            assert_eq!(kind.id().parse::<SchemeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn parse_accepts_case_and_separator_variants() {
        assert_eq!(
            "Split-Complementary".parse::<SchemeKind>().unwrap(),
            SchemeKind::SplitComplementary
        );
        assert_eq!(
            " split complementary ".parse::<SchemeKind>().unwrap(),
            SchemeKind::SplitComplementary
        );
        assert_eq!("TRIAD".parse::<SchemeKind>().unwrap(), SchemeKind::Triad);
    }

    #[test]
    fn parse_unknown_returns_error() {
        let err = "pentagon".parse::<SchemeKind>().unwrap_err();
        assert!(matches!(err, WheelError::UnknownScheme(ref s) if s == "pentagon"));
    }

    #[test]
    fn angular_kinds_include_the_base_slot_exactly_once() {
        for kind in SchemeKind::ALL {
            if kind == SchemeKind::Monochromatic {
                assert!(kind.offsets().is_empty());
                continue;
            }
            let zeros = kind.offsets().iter().filter(|&&o| o == 0).count();
            assert_eq!(zeros, 1, "{kind} should contain offset 0 once");
        }
    }

    #[test]
    fn analogous_emits_left_neighbour_first() {
        assert_eq!(SchemeKind::Analogous.offsets(), &[-30, 0, 30]);
    }

    #[test]
    fn offsets_are_multiples_of_thirty() {
        for kind in SchemeKind::ALL {
            for offset in kind.offsets() {
                assert_eq!(offset % 30, 0, "{kind} offset {offset} is off-grid");
            }
        }
    }

    #[test]
    fn serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&SchemeKind::SplitComplementary).unwrap();
        assert_eq!(json, "\"split_complementary\"");
        let kind: SchemeKind = serde_json::from_str("\"rectangle\"").unwrap();
        assert_eq!(kind, SchemeKind::Rectangle);
    }

    #[test]
    fn display_matches_id() {
        assert_eq!(SchemeKind::Monochromatic.to_string(), "monochromatic");
    }
}
