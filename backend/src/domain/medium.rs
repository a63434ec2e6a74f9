//! Artistic mediums a work of art or a profile can reference.
//!
//! The set is closed. Labels are matched case-insensitively after trimming and
//! always serialize in their canonical lowercase form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Enumerated artistic technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Medium {
    /// `acrylic`
    Acrylic,
    /// `charcoal`
    Charcoal,
    /// `color pencils`
    ColorPencils,
    /// `crayons`
    Crayons,
    /// `digital`
    Digital,
    /// `gouache`
    Gouache,
    /// `ink`
    Ink,
    /// `markers`
    Markers,
    /// `oil`
    Oil,
    /// `pan pastels`
    PanPastels,
    /// `pastels`
    Pastels,
    /// `pencils`
    Pencils,
    /// `watercolors`
    Watercolors,
}

/// Error returned when a label does not name a known medium.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown medium: {input}")]
pub struct ParseMediumError {
    input: String,
}

impl ParseMediumError {
    /// The rejected input as supplied by the caller.
    pub fn input(&self) -> &str {
        self.input.as_str()
    }
}

impl Medium {
    /// Every medium, in canonical label order.
    pub const ALL: [Self; 13] = [
        Self::Acrylic,
        Self::Charcoal,
        Self::ColorPencils,
        Self::Crayons,
        Self::Digital,
        Self::Gouache,
        Self::Ink,
        Self::Markers,
        Self::Oil,
        Self::PanPastels,
        Self::Pastels,
        Self::Pencils,
        Self::Watercolors,
    ];

    /// Canonical lowercase label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Acrylic => "acrylic",
            Self::Charcoal => "charcoal",
            Self::ColorPencils => "color pencils",
            Self::Crayons => "crayons",
            Self::Digital => "digital",
            Self::Gouache => "gouache",
            Self::Ink => "ink",
            Self::Markers => "markers",
            Self::Oil => "oil",
            Self::PanPastels => "pan pastels",
            Self::Pastels => "pastels",
            Self::Pencils => "pencils",
            Self::Watercolors => "watercolors",
        }
    }

    /// Resolve a label, treating anything unrecognised as absent.
    ///
    /// # Examples
    /// ```
    /// use artfolio::domain::Medium;
    ///
    /// assert_eq!(Medium::parse_lenient(" Oil "), Some(Medium::Oil));
    /// assert_eq!(Medium::parse_lenient("clay"), None);
    /// ```
    pub fn parse_lenient(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    /// Resolve every recognised label, dropping unknown entries and repeats.
    ///
    /// Order of first appearance is preserved.
    pub fn normalize_all<I, S>(labels: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mediums = Vec::new();
        for medium in labels
            .into_iter()
            .filter_map(|label| Self::parse_lenient(label.as_ref()))
        {
            if !mediums.contains(&medium) {
                mediums.push(medium);
            }
        }
        mediums
    }
}

impl fmt::Display for Medium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Medium {
    type Err = ParseMediumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|medium| medium.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseMediumError {
                input: s.to_owned(),
            })
    }
}

impl TryFrom<String> for Medium {
    type Error = ParseMediumError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Medium> for String {
    fn from(value: Medium) -> Self {
        value.as_str().to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("watercolors")]
    #[case("WATERCOLORS")]
    #[case("  WaterColors\t")]
    fn parsing_ignores_case_and_whitespace(#[case] input: &str) {
        assert_eq!(input.parse::<Medium>(), Ok(Medium::Watercolors));
    }

    #[test]
    fn every_label_round_trips_to_itself() {
        for medium in Medium::ALL {
            let upper = medium.as_str().to_uppercase();
            let parsed: Medium = upper.parse().expect("canonical label parses");
            assert_eq!(parsed.as_str(), medium.as_str());
        }
    }

    #[rstest]
    #[case("clay")]
    #[case("")]
    #[case("color-pencils")]
    fn unknown_labels_are_rejected(#[case] input: &str) {
        let err = input.parse::<Medium>().expect_err("unknown medium");
        assert_eq!(err.input(), input);
        assert_eq!(Medium::parse_lenient(input), None);
    }

    #[test]
    fn normalize_all_drops_unknown_and_duplicates() {
        let mediums = Medium::normalize_all(["Oil", "clay", "ink", "OIL", "pan pastels"]);
        assert_eq!(mediums, vec![Medium::Oil, Medium::Ink, Medium::PanPastels]);
    }

    #[test]
    fn serialises_as_canonical_label() {
        let json = serde_json::to_string(&Medium::ColorPencils).expect("serialise");
        assert_eq!(json, "\"color pencils\"");
        let parsed: Medium = serde_json::from_str("\"Color Pencils\"").expect("deserialise");
        assert_eq!(parsed, Medium::ColorPencils);
    }
}
