// src/domain/swara.rs
//
// Carnatic swara abbreviation table.
//
// The backend stores swara positions as dotted abbreviations ("S.R", "KK.N").
// Cards show the full names instead.

const SWARA_MAP: &[(&str, &str)] = &[
    ("S.R", "Suddha Rishabham"),
    ("C.R", "Chatusruti Rishabham"),
    ("SHA.R", "Shatsruti Rishabham"),
    ("S.G", "Sadharana Gandharam"),
    ("SA.G", "Sadharana Gandharam"),
    ("A.G", "Antara Gandharam"),
    ("SU.G", "Suddha Gandharam"),
    ("S.M", "Suddha Madhyamam"),
    ("P.M", "Prati Madhyamam"),
    ("S.D", "Suddha Daivatam"),
    ("C.D", "Chatusruti Daivatam"),
    ("SHA.D", "Shatsruti Daivatam"),
    ("K.N", "Kaisiki Nishadam"),
    ("KK.N", "Kakali Nishadam"),
    ("SU.N", "Suddha Nishadam"),
    ("P", "Panchamam"),
    ("S", "Shadjam"),
];

/// Full name for a single abbreviation, matched case-insensitively
pub fn swara_full_name(abbreviation: &str) -> Option<&'static str> {
    let key = abbreviation.trim().to_uppercase();
    SWARA_MAP
        .iter()
        .find(|(abbr, _)| *abbr == key)
        .map(|(_, full)| *full)
}

/// Expand a comma separated list of abbreviations.
///
/// Unknown parts are kept as written (trimmed). Missing or empty input is
/// returned unchanged.
pub fn expand_swara_value(value: Option<&str>) -> Option<String> {
    let value = value?;
    if value.is_empty() {
        return Some(String::new());
    }

    let expanded = value
        .split(',')
        .map(|part| {
            let trimmed = part.trim();
            swara_full_name(trimmed).unwrap_or(trimmed)
        })
        .collect::<Vec<_>>()
        .join(", ");

    Some(expanded)
}
