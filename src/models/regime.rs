use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::SelectionError;

/// Market sentiment regime, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Regime {
    ExtremeFear,
    Fear,
    Neutral,
    Greed,
    ExtremeGreed,
}

impl Regime {
    pub const ALL: [Regime; 5] = [
        Regime::ExtremeFear,
        Regime::Fear,
        Regime::Neutral,
        Regime::Greed,
        Regime::ExtremeGreed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Regime::ExtremeFear => "Extreme Fear",
            Regime::Fear => "Fear",
            Regime::Neutral => "Neutral",
            Regime::Greed => "Greed",
            Regime::ExtremeGreed => "Extreme Greed",
        }
    }

    /// Exact label match; surrounding whitespace is ignored.
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Regime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Regime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Regime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Regime::from_label(&label)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown regime: {label:?}")))
    }
}

// ---------------------------------------------------------------------------
// RegimeSelection — the sidebar filter
// ---------------------------------------------------------------------------

/// A subset of the five regimes. Iteration always follows `Regime::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegimeSelection {
    mask: u8,
}

impl RegimeSelection {
    pub fn all() -> Self {
        Regime::ALL.into_iter().collect()
    }

    pub fn empty() -> Self {
        Self { mask: 0 }
    }

    pub fn insert(&mut self, regime: Regime) {
        self.mask |= regime.bit();
    }

    pub fn contains(&self, regime: Regime) -> bool {
        self.mask & regime.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn iter(&self) -> impl Iterator<Item = Regime> + '_ {
        Regime::ALL.into_iter().filter(|r| self.contains(*r))
    }

    /// Parse a comma-separated list of labels, e.g. `"Fear,Extreme Greed"`.
    /// An empty (or all-blank) string is the empty selection.
    pub fn parse_list(raw: &str) -> Result<Self, SelectionError> {
        Self::from_labels(raw.split(',').filter(|s| !s.trim().is_empty()))
    }

    pub fn from_labels<I, S>(labels: I) -> Result<Self, SelectionError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::empty();
        for label in labels {
            let label = label.as_ref();
            let regime = Regime::from_label(label)
                .ok_or_else(|| SelectionError::UnknownRegime(label.trim().to_string()))?;
            selection.insert(regime);
        }
        Ok(selection)
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.iter().map(|r| r.as_str()).collect()
    }
}

impl Default for RegimeSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<Regime> for RegimeSelection {
    fn from_iter<I: IntoIterator<Item = Regime>>(iter: I) -> Self {
        let mut selection = Self::empty();
        for regime in iter {
            selection.insert(regime);
        }
        selection
    }
}

impl Serialize for RegimeSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_exact_and_trimmed() {
        assert_eq!(Regime::from_label("Extreme Fear"), Some(Regime::ExtremeFear));
        assert_eq!(Regime::from_label("  Greed "), Some(Regime::Greed));
        assert_eq!(Regime::from_label("greed"), None);
        assert_eq!(Regime::from_label(""), None);
    }

    #[test]
    fn test_default_selection_is_all_in_order() {
        let sel = RegimeSelection::default();
        assert_eq!(sel.len(), 5);
        assert_eq!(
            sel.labels(),
            vec!["Extreme Fear", "Fear", "Neutral", "Greed", "Extreme Greed"]
        );
    }

    #[test]
    fn test_parse_list_reorders_and_dedups() {
        let sel = RegimeSelection::parse_list("Greed, Fear,Greed").unwrap();
        assert_eq!(sel.labels(), vec!["Fear", "Greed"]);
    }

    #[test]
    fn test_parse_list_empty_string_is_empty_selection() {
        let sel = RegimeSelection::parse_list("").unwrap();
        assert!(sel.is_empty());
        assert!(RegimeSelection::parse_list(" , ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_list_unknown_label() {
        let err = RegimeSelection::parse_list("Fear,Panic").unwrap_err();
        assert_eq!(err, SelectionError::UnknownRegime("Panic".into()));
    }

    #[test]
    fn test_regime_serde_uses_labels() {
        let json = serde_json::to_string(&Regime::ExtremeGreed).unwrap();
        assert_eq!(json, "\"Extreme Greed\"");
        let back: Regime = serde_json::from_str("\"Neutral\"").unwrap();
        assert_eq!(back, Regime::Neutral);
        assert!(serde_json::from_str::<Regime>("\"Euphoria\"").is_err());
    }
}
