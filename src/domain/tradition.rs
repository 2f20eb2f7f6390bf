// src/domain/tradition.rs
//
// Tradition value objects.
//
// A tradition names one of the two backend catalogs. A selection is the set
// of traditions the user has enabled; an empty selection means "both".

use serde::{Deserialize, Serialize};

/// One of the two classification systems for ragas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tradition {
    Hindustani,
    Carnatic,
}

impl Tradition {
    /// Both traditions, in canonical display order.
    pub const ALL: [Tradition; 2] = [Tradition::Hindustani, Tradition::Carnatic];

    /// Capitalized label used in user-facing messages
    pub fn label(&self) -> &'static str {
        match self {
            Tradition::Hindustani => "Hindustani",
            Tradition::Carnatic => "Carnatic",
        }
    }

    /// The other tradition
    pub fn other(&self) -> Tradition {
        match self {
            Tradition::Hindustani => Tradition::Carnatic,
            Tradition::Carnatic => Tradition::Hindustani,
        }
    }
}

impl std::fmt::Display for Tradition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tradition::Hindustani => write!(f, "hindustani"),
            Tradition::Carnatic => write!(f, "carnatic"),
        }
    }
}

impl std::str::FromStr for Tradition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hindustani" => Ok(Tradition::Hindustani),
            "carnatic" => Ok(Tradition::Carnatic),
            other => Err(format!("Unknown tradition: {}", other)),
        }
    }
}

/// The set of traditions enabled by the caller.
///
/// Stored as two flags rather than a collection: there are only two
/// traditions and the order of enabling carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraditionSelection {
    pub hindustani: bool,
    pub carnatic: bool,
}

impl TraditionSelection {
    /// Both traditions enabled (the UI default)
    pub fn both() -> Self {
        Self {
            hindustani: true,
            carnatic: true,
        }
    }

    /// Nothing enabled. Resolves the same as `both()`.
    pub fn none() -> Self {
        Self {
            hindustani: false,
            carnatic: false,
        }
    }

    /// Exactly one tradition enabled
    pub fn only(tradition: Tradition) -> Self {
        match tradition {
            Tradition::Hindustani => Self {
                hindustani: true,
                carnatic: false,
            },
            Tradition::Carnatic => Self {
                hindustani: false,
                carnatic: true,
            },
        }
    }

    /// Build a selection from any list of traditions (duplicates are ignored)
    pub fn from_traditions<I>(traditions: I) -> Self
    where
        I: IntoIterator<Item = Tradition>,
    {
        traditions
            .into_iter()
            .fold(Self::none(), |selection, tradition| selection.with(tradition, true))
    }

    /// Returns a copy with one tradition switched on or off
    pub fn with(self, tradition: Tradition, enabled: bool) -> Self {
        match tradition {
            Tradition::Hindustani => Self {
                hindustani: enabled,
                ..self
            },
            Tradition::Carnatic => Self {
                carnatic: enabled,
                ..self
            },
        }
    }

    /// Flip one tradition (checkbox toggle)
    pub fn toggle(self, tradition: Tradition) -> Self {
        let enabled = self.contains(tradition);
        self.with(tradition, !enabled)
    }

    pub fn contains(&self, tradition: Tradition) -> bool {
        match tradition {
            Tradition::Hindustani => self.hindustani,
            Tradition::Carnatic => self.carnatic,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.hindustani && !self.carnatic
    }

    /// Empty selection is treated identically to both enabled.
    pub fn normalized(self) -> Self {
        if self.is_empty() {
            Self::both()
        } else {
            self
        }
    }

    /// Enabled traditions after normalization, in canonical order
    pub fn enabled(&self) -> Vec<Tradition> {
        let normalized = self.normalized();
        Tradition::ALL
            .into_iter()
            .filter(|t| normalized.contains(*t))
            .collect()
    }

    /// The single enabled tradition, if exactly one is enabled
    pub fn single(&self) -> Option<Tradition> {
        match (self.hindustani, self.carnatic) {
            (true, false) => Some(Tradition::Hindustani),
            (false, true) => Some(Tradition::Carnatic),
            _ => None,
        }
    }
}

impl Default for TraditionSelection {
    fn default() -> Self {
        Self::both()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_normalizes_to_both() {
        let selection = TraditionSelection::none();
        assert!(selection.is_empty());
        assert_eq!(selection.normalized(), TraditionSelection::both());
        assert_eq!(
            selection.enabled(),
            vec![Tradition::Hindustani, Tradition::Carnatic]
        );
    }

    #[test]
    fn test_single_selection() {
        let selection = TraditionSelection::only(Tradition::Carnatic);
        assert_eq!(selection.single(), Some(Tradition::Carnatic));
        assert_eq!(selection.enabled(), vec![Tradition::Carnatic]);
        assert_eq!(TraditionSelection::both().single(), None);
        assert_eq!(TraditionSelection::none().single(), None);
    }

    #[test]
    fn test_toggle_and_from_traditions() {
        let selection = TraditionSelection::both().toggle(Tradition::Hindustani);
        assert_eq!(selection, TraditionSelection::only(Tradition::Carnatic));

        let built = TraditionSelection::from_traditions([
            Tradition::Carnatic,
            Tradition::Carnatic,
            Tradition::Hindustani,
        ]);
        assert_eq!(built, TraditionSelection::both());
    }

    #[test]
    fn test_tradition_parse_and_display() {
        assert_eq!("Hindustani".parse::<Tradition>(), Ok(Tradition::Hindustani));
        assert_eq!(" carnatic ".parse::<Tradition>(), Ok(Tradition::Carnatic));
        assert!("dhrupad".parse::<Tradition>().is_err());
        assert_eq!(Tradition::Carnatic.to_string(), "carnatic");
        assert_eq!(Tradition::Hindustani.label(), "Hindustani");
        assert_eq!(Tradition::Hindustani.other(), Tradition::Carnatic);
    }
}
