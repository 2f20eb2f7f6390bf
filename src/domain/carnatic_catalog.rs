// src/domain/carnatic_catalog.rs
//
// Static index of Carnatic raga names for the browse page. Details are
// fetched from the backend on selection; this list only drives the picker.

const CARNATIC_RAGAS: &[&str] = &[
    "Abheri",
    "Abhogi",
    "Amritavarshini",
    "Anandabhairavi",
    "Arabhi",
    "Atana",
    "Begada",
    "Behag",
    "Bhairavi",
    "Bilahari",
    "Brindavani",
    "Chakravakam",
    "Charukesi",
    "Darbar",
    "Dharmavati",
    "Dhanyasi",
    "Gambhiranata",
    "Gaurimanohari",
    "Hamsadhwani",
    "Hamsanandi",
    "Harikambhoji",
    "Hemavati",
    "Hindolam",
    "Kalyani",
    "Kamas",
    "Kambhoji",
    "Kanakangi",
    "Kanada",
    "Kapi",
    "Kedaragaula",
    "Keeravani",
    "Kharaharapriya",
    "Madhyamavati",
    "Malahari",
    "Mayamalavagowla",
    "Mohanam",
    "Mukhari",
    "Nata",
    "Natabhairavi",
    "Nattai",
    "Navaroj",
    "Neelambari",
    "Pantuvarali",
    "Poorvikalyani",
    "Reetigowla",
    "Revati",
    "Saveri",
    "Shankarabharanam",
    "Shanmukhapriya",
    "Shree",
    "Shubhapantuvarali",
    "Simhendramadhyamam",
    "Sindhubhairavi",
    "Sri Ranjani",
    "Suddha Dhanyasi",
    "Suruti",
    "Todi",
    "Vachaspati",
    "Vasantha",
    "Yadukula Kambhoji",
];

/// All Carnatic raga names known to the browse index, unsorted
pub fn carnatic_raga_names() -> &'static [&'static str] {
    CARNATIC_RAGAS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_index_has_no_duplicates() {
        let names = carnatic_raga_names();
        let unique: HashSet<_> = names.iter().map(|n| n.to_lowercase()).collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_index_contains_common_ragas() {
        let names = carnatic_raga_names();
        assert!(names.contains(&"Kalyani"));
        assert!(names.contains(&"Todi"));
    }
}
