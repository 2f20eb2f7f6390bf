// src/domain/membership.rs
//
// Hindustani membership table.
//
// A static, read-only set of raga names known to be Hindustani. It only
// biases lookup order; it is neither exhaustive nor authoritative. The set is
// built once per process and shared by every resolution without locking.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::domain::Tradition;

const HINDUSTANI_RAGAS: &[&str] = &[
    "Abhogi Kanada",
    "Adana",
    "Ahir Bhairav",
    "Alhaiya Bilawal",
    "Asavari",
    "Bageshri",
    "Bahar",
    "Basant",
    "Basant Mukhari",
    "Bhairav",
    "Bhairavi",
    "Bhatiyar",
    "Bhimpalasi",
    "Bhupali",
    "Bihag",
    "Bilaskhani Todi",
    "Bilawal",
    "Chandrakauns",
    "Chhayanat",
    "Darbari",
    "Darbari Kanada",
    "Desh",
    "Deshkar",
    "Durga",
    "Gaud Malhar",
    "Gaud Sarang",
    "Gorakh Kalyan",
    "Gujari Todi",
    "Hameer",
    "Hindol",
    "Jaijaivanti",
    "Jaunpuri",
    "Jog",
    "Jogkauns",
    "Kafi",
    "Kalavati",
    "Kamod",
    "Kedar",
    "Khamaj",
    "Lalit",
    "Madhuvanti",
    "Malkauns",
    "Maru Bihag",
    "Marwa",
    "Megh",
    "Miyan ki Malhar",
    "Miyan ki Todi",
    "Multani",
    "Nand",
    "Patdeep",
    "Pilu",
    "Puriya",
    "Puriya Dhanashree",
    "Purvi",
    "Rageshree",
    "Ramkali",
    "Shankara",
    "Shree",
    "Shuddh Kalyan",
    "Shuddh Sarang",
    "Sohini",
    "Sur Malhar",
    "Tilak Kamod",
    "Tilang",
    "Todi",
    "Vibhas",
    "Vrindavani Sarang",
    "Yaman",
    "Yaman Kalyan",
];

static DEFAULT_MEMBERSHIP: Lazy<TraditionMembership> =
    Lazy::new(|| TraditionMembership::from_names(HINDUSTANI_RAGAS.iter().copied()));

/// Case-insensitive set of names that bias lookup toward Hindustani.
#[derive(Debug, Clone, Default)]
pub struct TraditionMembership {
    hindustani: HashSet<String>,
}

impl TraditionMembership {
    /// Build a table from arbitrary names. Names are normalized the same way
    /// queries are (trimmed, inner whitespace collapsed, lowercased).
    pub fn from_names<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self {
            hindustani: names.into_iter().map(normalize_name).collect(),
        }
    }

    /// The process-wide table shipped with the app
    pub fn shared() -> &'static TraditionMembership {
        &DEFAULT_MEMBERSHIP
    }

    /// True if `name` is listed as Hindustani
    pub fn is_hindustani(&self, name: &str) -> bool {
        self.hindustani.contains(&normalize_name(name))
    }

    /// The tradition to try first when both are enabled
    pub fn preferred_tradition(&self, name: &str) -> Tradition {
        if self.is_hindustani(name) {
            Tradition::Hindustani
        } else {
            Tradition::Carnatic
        }
    }

    pub fn len(&self) -> usize {
        self.hindustani.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hindustani.is_empty()
    }
}

fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_table_membership() {
        let table = TraditionMembership::shared();
        assert!(table.is_hindustani("Bhairavi"));
        assert!(table.is_hindustani("yaman"));
        assert!(table.is_hindustani("  MIYAN   ki malhar "));
        assert!(!table.is_hindustani("Kalyani"));
        assert!(!table.is_hindustani("Zzznotaraga"));
    }

    #[test]
    fn test_preferred_tradition() {
        let table = TraditionMembership::shared();
        assert_eq!(table.preferred_tradition("Bhairavi"), Tradition::Hindustani);
        assert_eq!(table.preferred_tradition("Kalyani"), Tradition::Carnatic);
    }

    #[test]
    fn test_custom_table() {
        let table = TraditionMembership::from_names(["Yaman", "yaman", "Kafi"]);
        assert_eq!(table.len(), 2);
        assert!(table.is_hindustani("KAFI"));
        assert!(TraditionMembership::default().is_empty());
    }
}
