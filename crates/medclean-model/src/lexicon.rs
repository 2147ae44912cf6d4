//! The clinical lexicon: abbreviation expansions and the doctor/diagnosis
//! crosswalk.
//!
//! The lexicon is immutable, built once, and passed explicitly to the
//! stages that consume it. Entry order matters: abbreviations are applied
//! in table order, and inverse crosswalk ambiguity resolves to the entry
//! inserted last.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// On-disk lexicon format: ordered arrays of pairs, so JSON round-trips
/// preserve application order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LexiconFile {
    /// `(abbreviation, expansion)` pairs in application order.
    pub abbreviations: Vec<(String, String)>,
    /// `(doctor, diagnosis code)` pairs in insertion order.
    pub crosswalk: Vec<(String, String)>,
}

/// Immutable lookup tables shared by the cleaning stages.
#[derive(Debug, Clone)]
pub struct Lexicon {
    abbreviations: Vec<(String, String)>,
    crosswalk: Vec<(String, String)>,
    doctor_to_code: BTreeMap<String, String>,
    code_to_doctors: BTreeMap<String, Vec<String>>,
}

impl Lexicon {
    /// Build a lexicon from ordered entry lists.
    pub fn new(abbreviations: Vec<(String, String)>, crosswalk: Vec<(String, String)>) -> Self {
        let mut doctor_to_code = BTreeMap::new();
        let mut code_to_doctors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (doctor, code) in &crosswalk {
            doctor_to_code.insert(doctor.clone(), code.clone());
            code_to_doctors
                .entry(code.clone())
                .or_default()
                .push(doctor.clone());
        }
        Self {
            abbreviations,
            crosswalk,
            doctor_to_code,
            code_to_doctors,
        }
    }

    /// Build from the serialized file format.
    pub fn from_file(file: LexiconFile) -> Self {
        Self::new(file.abbreviations, file.crosswalk)
    }

    /// The built-in clinical tables: 14 common abbreviations and the
    /// 7-doctor specialty crosswalk.
    pub fn clinical() -> Self {
        let abbreviations = [
            ("DM", "Diabetes Mellitus"),
            ("HBP", "High Blood Pressure"),
            ("CAD", "Coronary Artery Disease"),
            ("BP", "Blood Pressure"),
            ("Rx", "Prescription"),
            ("SOB", "Shortness of Breath"),
            ("CP", "Chest Pain"),
            ("Pt", "Patient"),
            ("Hx", "History"),
            ("Dx", "Diagnosis"),
            ("CA", "Cancer"),
            ("PPI", "Proton Pump Inhibitor"),
            ("GERD", "Gastroesophageal Reflux Disease"),
            ("PRN", "As Needed"),
        ];
        let crosswalk = [
            ("Dr. John Smith (Endocrinologist)", "E11"),
            ("Dr. Jane Doe (Cardiologist)", "I10"),
            ("Dr. Alex Brown (Pulmonologist)", "J45"),
            ("Dr. Emma White (Oncologist)", "C34.1"),
            ("Dr. Noah Carter (Orthopedic Surgeon)", "M54.5"),
            ("Dr. Ava Wilson (Gastroenterologist)", "K21.9"),
            ("Dr. Liam Johnson (Nephrologist)", "N18.9"),
        ];
        Self::new(
            abbreviations
                .into_iter()
                .map(|(short, long)| (short.to_string(), long.to_string()))
                .collect(),
            crosswalk
                .into_iter()
                .map(|(doctor, code)| (doctor.to_string(), code.to_string()))
                .collect(),
        )
    }

    /// Abbreviation entries in application order.
    pub fn abbreviations(&self) -> impl Iterator<Item = (&str, &str)> {
        self.abbreviations
            .iter()
            .map(|(short, long)| (short.as_str(), long.as_str()))
    }

    /// Crosswalk entries in insertion order.
    pub fn crosswalk_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.crosswalk
            .iter()
            .map(|(doctor, code)| (doctor.as_str(), code.as_str()))
    }

    /// Diagnosis code for a doctor, if the doctor is known.
    pub fn code_for_doctor(&self, doctor: &str) -> Option<&str> {
        self.doctor_to_code.get(doctor).map(String::as_str)
    }

    /// Every doctor mapped to a diagnosis code, in insertion order. More
    /// than one entry means the inverse lookup is ambiguous for this code.
    pub fn doctors_for_code(&self, code: &str) -> &[String] {
        self.code_to_doctors
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Single-doctor inverse lookup. When the code is ambiguous this
    /// resolves last-write-wins over the forward entries; callers that
    /// care about ambiguity should use [`Lexicon::doctors_for_code`].
    pub fn doctor_for_code(&self, code: &str) -> Option<&str> {
        self.doctors_for_code(code).last().map(String::as_str)
    }

    pub fn abbreviation_count(&self) -> usize {
        self.abbreviations.len()
    }

    pub fn crosswalk_count(&self) -> usize {
        self.crosswalk.len()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::clinical()
    }
}
