// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly (labels resolved, swaras expanded, placeholders filled)
// - Conversion FROM domain values only
// - Request DTOs carry raw user input; validation stays in the domain

use serde::{Deserialize, Serialize};

use crate::domain::archive::{mime_type_from_url, MIME_OCTET_STREAM};
use crate::domain::{
    expand_swara_value, CarnaticRaga, HindustaniRaga, MediaCategory, Page, RagaRecord,
    SessionFile, Tradition, TraditionSelection,
};
use crate::services::{ArchiveListing, CategoryCounts, ChatReply, SearchState, SearchStatus};

/// Shown for a field the catalog left empty
pub const MISSING_VALUE: &str = "—";

// ============================================================================
// RAGA CARD DTOs
// ============================================================================

/// One labelled line on a raga card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRow {
    pub label: String,
    pub value: String,
}

impl DetailRow {
    fn text(label: &str, value: Option<&str>) -> Self {
        let value = match value.map(str::trim) {
            Some(value) if !value.is_empty() => value.to_string(),
            _ => MISSING_VALUE.to_string(),
        };
        Self {
            label: label.to_string(),
            value,
        }
    }

    fn swara(label: &str, value: Option<&str>) -> Self {
        Self::text(label, expand_swara_value(value).as_deref())
    }

    fn flag(label: &str, value: Option<bool>) -> Self {
        let value = match value {
            Some(true) => "Yes",
            Some(false) => "No",
            None => MISSING_VALUE,
        };
        Self {
            label: label.to_string(),
            value: value.to_string(),
        }
    }

    fn number(label: &str, value: Option<i32>) -> Self {
        Self::text(label, value.map(|n| n.to_string()).as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagaCardDto {
    pub tradition: Tradition,
    pub id: i64,
    pub raga_name: String,

    /// Short facts shown as chips under the title
    pub chips: Vec<DetailRow>,
    pub details: Vec<DetailRow>,
    pub audio_url: Option<String>,
}

impl From<CarnaticRaga> for RagaCardDto {
    fn from(raga: CarnaticRaga) -> Self {
        let chips = vec![
            DetailRow::number("Melakarta", raga.melakartha_id),
            DetailRow::text("Raga Type", raga.raga_type.as_deref()),
            DetailRow::text("Chakram", raga.chakram.as_deref()),
            DetailRow::flag("Popular", raga.popular_raga),
        ];

        let details = vec![
            DetailRow::text("Alternative Name", raga.alternative_raga_name.as_deref()),
            DetailRow::text("Arohana", raga.arohana.as_deref()),
            DetailRow::text("Avarohana", raga.avarohana.as_deref()),
            DetailRow::swara("Rishabham", raga.rishabham.as_deref()),
            DetailRow::swara("Gandharam", raga.gandharam.as_deref()),
            DetailRow::swara("Madhyamam", raga.madhyamam.as_deref()),
            DetailRow::swara("Panchamam", raga.panchamam.as_deref()),
            DetailRow::swara("Daivatam", raga.daivatam.as_deref()),
            DetailRow::swara("Nishadam", raga.nishadam.as_deref()),
            DetailRow::swara("Vadi Swara", raga.vadi_swara.as_deref()),
            DetailRow::swara("Samvadi Swara", raga.samvadi_swara.as_deref()),
            DetailRow::swara("Graha Swara", raga.grahaswara.as_deref()),
            DetailRow::swara("Nyasa Swara", raga.nyasa_swara.as_deref()),
            DetailRow::swara("Jeeva Swara", raga.jeeva_swara.as_deref()),
            DetailRow::text("Rasa", raga.rasa.as_deref()),
            DetailRow::text("Hindustani Equi Raga", raga.hindustani_equi_raga.as_deref()),
            DetailRow::flag("Popular Raga", raga.popular_raga),
            DetailRow::flag("Rakti Raga", raga.rakti_raga),
            DetailRow::flag("Ancient Raga", raga.ancient_raga),
            DetailRow::flag("Upanga Raga", raga.upanga_raga),
            DetailRow::flag("Bhashanga Raga", raga.bhashanga_raga),
            DetailRow::text("Anyaswaram", raga.anyaswaram.as_deref()),
            DetailRow::text("Apuroopa Prayogas", raga.apuroopa_prayogas.as_deref()),
            DetailRow::text("Swara Sancharam", raga.swara_sancharam.as_deref()),
            DetailRow::text("Additional Notes", raga.additional_notes.as_deref()),
            DetailRow::text("Compositions", raga.compositions.as_deref()),
        ];

        Self {
            tradition: Tradition::Carnatic,
            id: raga.id,
            raga_name: raga.raga_name,
            chips,
            details,
            audio_url: raga.audio_file,
        }
    }
}

impl From<HindustaniRaga> for RagaCardDto {
    fn from(raga: HindustaniRaga) -> Self {
        let chips = vec![
            DetailRow::text("Thaat", raga.thaat.as_deref()),
            DetailRow::text("Samay", raga.samay.as_deref()),
        ];

        let details = vec![
            DetailRow::text("Alternate Name", raga.alternate_raga_name.as_deref()),
            DetailRow::text("Arohan", raga.arohan.as_deref()),
            DetailRow::text("Avarohan", raga.avarohan.as_deref()),
            DetailRow::text("Vaadi", raga.vaadi.as_deref()),
            DetailRow::text("Samvaadi", raga.samvaadi.as_deref()),
            DetailRow::text("Pakad", raga.pakad.as_deref()),
            DetailRow::text("Description", raga.description.as_deref()),
            DetailRow::text("Compositions", raga.compositions.as_deref()),
        ];

        Self {
            tradition: Tradition::Hindustani,
            id: raga.id,
            raga_name: raga.raga_name,
            chips,
            details,
            audio_url: raga.audio_file,
        }
    }
}

impl From<RagaRecord> for RagaCardDto {
    fn from(record: RagaRecord) -> Self {
        match record {
            RagaRecord::Carnatic(raga) => raga.into(),
            RagaRecord::Hindustani(raga) => raga.into(),
        }
    }
}

// ============================================================================
// SEARCH DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequestDto {
    pub query: String,
    pub hindustani: bool,
    pub carnatic: bool,
}

impl SearchRequestDto {
    pub fn selection(&self) -> TraditionSelection {
        TraditionSelection {
            hindustani: self.hindustani,
            carnatic: self.carnatic,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultDto {
    pub query: String,
    pub status: SearchStatus,
    pub has_searched: bool,
    pub error: Option<String>,
    pub raga: Option<RagaCardDto>,
}

impl From<SearchState> for SearchResultDto {
    fn from(state: SearchState) -> Self {
        Self {
            query: state.query,
            status: state.status,
            has_searched: state.has_searched,
            error: state.error,
            raga: state.result.map(|resolved| resolved.into_record().into()),
        }
    }
}

// ============================================================================
// BROWSE DTOs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseRequestDto {
    pub letter: Option<char>,
    pub text: Option<String>,
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowsePageDto {
    pub letters: Vec<char>,
    pub letter: Option<char>,
    pub text: Option<String>,
    pub names: Page<String>,
}

// ============================================================================
// ARCHIVE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveFileDto {
    pub file_name: String,
    pub file_type: String,
    pub category: MediaCategory,
    pub mime_type: String,
    pub url: String,
}

impl From<SessionFile> for ArchiveFileDto {
    fn from(file: SessionFile) -> Self {
        let category = file.category();
        let mime_type = match file.mime_type() {
            MIME_OCTET_STREAM => mime_type_from_url(file.file_data.as_deref()),
            known => known,
        };

        Self {
            file_name: file.file_name,
            file_type: file.file_type,
            category,
            mime_type: mime_type.to_string(),
            url: file.file_data.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchivePageDto {
    pub category: MediaCategory,
    pub counts: CategoryCountsDto,
    pub files: Page<ArchiveFileDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCountsDto {
    pub all: usize,
    pub pdf: usize,
    pub audio: usize,
    pub video: usize,
}

impl From<CategoryCounts> for CategoryCountsDto {
    fn from(counts: CategoryCounts) -> Self {
        Self {
            all: counts.all,
            pdf: counts.pdf,
            audio: counts.audio,
            video: counts.video,
        }
    }
}

impl From<ArchiveListing> for ArchivePageDto {
    fn from(listing: ArchiveListing) -> Self {
        let page = listing.page;
        Self {
            category: listing.category,
            counts: listing.counts.into(),
            files: Page {
                items: page.items.into_iter().map(ArchiveFileDto::from).collect(),
                page: page.page,
                page_count: page.page_count,
                page_size: page.page_size,
                total: page.total,
            },
        }
    }
}

// ============================================================================
// CHAT / ACCOUNT DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReplyDto {
    pub text: String,
    pub local: bool,
}

impl From<ChatReply> for ChatReplyDto {
    fn from(reply: ChatReply) -> Self {
        Self {
            text: reply.text,
            local: reply.local,
        }
    }
}

/// Confirmation text for actions with no other payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDto {
    pub success: bool,
    pub message: String,
}

impl MessageDto {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
