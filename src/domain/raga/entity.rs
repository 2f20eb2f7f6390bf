use serde::{Deserialize, Serialize};

use crate::domain::Tradition;

/// A raga record from the Carnatic catalog (`/raga/{name}`).
///
/// The backend owns this schema. Everything except the identity fields is
/// optional because older rows leave most columns empty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarnaticRaga {
    pub id: i64,
    pub raga_name: String,
    pub alternative_raga_name: Option<String>,
    pub melakartha_id: Option<i32>,
    pub chakram: Option<String>,
    pub raga_type: Option<String>,
    pub arohana: Option<String>,
    pub avarohana: Option<String>,

    /// Swara positions, stored as comma separated abbreviations (`S.R, C.R`)
    pub rishabham: Option<String>,
    pub gandharam: Option<String>,
    pub madhyamam: Option<String>,
    pub panchamam: Option<String>,
    pub daivatam: Option<String>,
    pub nishadam: Option<String>,

    pub vadi_swara: Option<String>,
    pub samvadi_swara: Option<String>,
    pub grahaswara: Option<String>,
    pub nyasa_swara: Option<String>,
    pub jeeva_swara: Option<String>,
    pub rasa: Option<String>,
    pub hindustani_equi_raga: Option<String>,
    pub popular_raga: Option<bool>,
    pub rakti_raga: Option<bool>,
    pub ancient_raga: Option<bool>,
    pub upanga_raga: Option<bool>,
    pub bhashanga_raga: Option<bool>,
    pub anyaswaram: Option<String>,
    pub apuroopa_prayogas: Option<String>,
    pub swara_sancharam: Option<String>,
    pub additional_notes: Option<String>,
    pub compositions: Option<String>,
    pub description: Option<String>,

    /// Base64 encoded mp3 sample
    pub audio_file: Option<String>,
}

/// A raga record from the Hindustani catalog (`/HindustaniRaga/{name}`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HindustaniRaga {
    pub id: i64,
    pub raga_name: String,
    pub alternate_raga_name: Option<String>,
    pub arohan: Option<String>,
    pub avarohan: Option<String>,
    pub thaat: Option<String>,
    pub rishab: Option<String>,
    pub gandhar: Option<String>,
    pub madhyam: Option<String>,
    pub pancham: Option<String>,
    pub daivat: Option<String>,
    pub nishad: Option<String>,
    pub vaadi: Option<String>,
    pub samvaadi: Option<String>,
    pub anyaswar: Option<String>,
    pub pakad: Option<String>,
    pub samay: Option<String>,
    pub compositions: Option<String>,
    pub description: Option<String>,
    pub audio_file: Option<String>,
}

/// A raga record tagged with the catalog it came from.
///
/// The tag is set by whoever decoded the record (the catalog client knows
/// which endpoint it called). It is never inferred from which fields happen
/// to be present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tradition", content = "record", rename_all = "snake_case")]
pub enum RagaRecord {
    Hindustani(HindustaniRaga),
    Carnatic(CarnaticRaga),
}

impl RagaRecord {
    /// The catalog this record belongs to
    pub fn tradition(&self) -> Tradition {
        match self {
            RagaRecord::Hindustani(_) => Tradition::Hindustani,
            RagaRecord::Carnatic(_) => Tradition::Carnatic,
        }
    }

    pub fn raga_name(&self) -> &str {
        match self {
            RagaRecord::Hindustani(raga) => &raga.raga_name,
            RagaRecord::Carnatic(raga) => &raga.raga_name,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            RagaRecord::Hindustani(raga) => raga.id,
            RagaRecord::Carnatic(raga) => raga.id,
        }
    }

    /// Decode a backend JSON body as the record type of `tradition`
    pub fn from_json(
        tradition: Tradition,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        match tradition {
            Tradition::Hindustani => serde_json::from_value(value).map(RagaRecord::Hindustani),
            Tradition::Carnatic => serde_json::from_value(value).map(RagaRecord::Carnatic),
        }
    }
}
