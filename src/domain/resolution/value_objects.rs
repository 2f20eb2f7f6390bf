// src/domain/resolution/value_objects.rs
//
// Resolution Value Objects
//
// Pure, immutable data structures representing resolution outcomes.
//
// CRITICAL INVARIANTS:
// - A found raga always carries the tradition whose catalog produced it
// - Failures keep attempt order
// - Clone + Debug + Serialize for traceability

use serde::{Deserialize, Serialize};

use crate::domain::{RagaRecord, Tradition};

// ============================================================================
// RESOLUTION OUTCOME (TOP-LEVEL RESULT)
// ============================================================================

/// The outcome of resolving one query.
/// Either one matched record or the full list of per-tradition failures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionOutcome {
    /// A catalog returned a record
    Found(ResolvedRaga),

    /// Every tried catalog failed
    NotFound {
        query: String,
        failures: Vec<LookupFailure>,
    },
}

impl ResolutionOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ResolutionOutcome::Found(_))
    }

    /// Extracts the resolved raga if found
    pub fn resolved(&self) -> Option<&ResolvedRaga> {
        match self {
            ResolutionOutcome::Found(resolved) => Some(resolved),
            ResolutionOutcome::NotFound { .. } => None,
        }
    }

    /// Per-tradition failures in attempt order (empty when found)
    pub fn failures(&self) -> &[LookupFailure] {
        match self {
            ResolutionOutcome::Found(_) => &[],
            ResolutionOutcome::NotFound { failures, .. } => failures,
        }
    }

    /// Human-readable summary, suitable for rendering as-is.
    /// `None` when a record was found.
    pub fn message(&self) -> Option<String> {
        match self {
            ResolutionOutcome::Found(_) => None,
            ResolutionOutcome::NotFound { query, failures } => {
                Some(not_found_message(query, failures))
            }
        }
    }
}

fn not_found_message(query: &str, failures: &[LookupFailure]) -> String {
    match failures {
        [single] => format!(
            "Could not find raga \"{}\" in the {} catalog. {}",
            query,
            single.tradition.label(),
            single.message
        ),
        _ => {
            let details = failures
                .iter()
                .map(|f| format!("{}: {}", f.tradition.label(), f.message))
                .collect::<Vec<_>>()
                .join("; ");
            format!(
                "Could not find raga \"{}\" in the Hindustani or Carnatic catalogs. {}",
                query, details
            )
        }
    }
}

// ============================================================================
// RESOLVED RAGA
// ============================================================================

/// A record plus the tradition whose catalog matched.
///
/// The tradition is the catalog the resolver queried. It may differ from
/// what the membership table predicted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedRaga {
    pub tradition: Tradition,
    pub record: RagaRecord,
}

impl ResolvedRaga {
    /// Tag `record` with the catalog that returned it.
    ///
    /// Gives the record back when its variant belongs to another tradition.
    pub fn new(tradition: Tradition, record: RagaRecord) -> Result<Self, RagaRecord> {
        if record.tradition() != tradition {
            return Err(record);
        }
        Ok(Self { tradition, record })
    }

    pub fn raga_name(&self) -> &str {
        self.record.raga_name()
    }

    pub fn into_record(self) -> RagaRecord {
        self.record
    }
}

// ============================================================================
// LOOKUP FAILURE
// ============================================================================

/// Why one tradition's catalog did not produce a record.
/// Not-found and transport failures are not distinguished here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupFailure {
    pub tradition: Tradition,
    pub message: String,
}

impl LookupFailure {
    pub fn new(tradition: Tradition, message: impl Into<String>) -> Self {
        Self {
            tradition,
            message: message.into(),
        }
    }
}

// ============================================================================
// RESOLUTION STATE (PER CALL)
// ============================================================================

/// Progress of a single resolution.
///
/// `NotStarted -> Trying(t) -> ... -> Succeeded | ExhaustedFailed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "tradition", rename_all = "snake_case")]
pub enum ResolutionState {
    NotStarted,
    Trying(Tradition),
    Succeeded,
    ExhaustedFailed,
}

impl ResolutionState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, ResolutionState::Succeeded | ResolutionState::ExhaustedFailed)
    }
}

impl std::fmt::Display for ResolutionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionState::NotStarted => write!(f, "not_started"),
            ResolutionState::Trying(tradition) => write!(f, "trying_{}", tradition),
            ResolutionState::Succeeded => write!(f, "succeeded"),
            ResolutionState::ExhaustedFailed => write!(f, "exhausted_failed"),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CarnaticRaga, HindustaniRaga};

    fn carnatic(name: &str) -> RagaRecord {
        RagaRecord::Carnatic(CarnaticRaga {
            id: 1,
            raga_name: name.to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn test_resolved_raga_keeps_queried_tradition() {
        let resolved = ResolvedRaga::new(Tradition::Carnatic, carnatic("Bhairavi")).unwrap();
        assert_eq!(resolved.tradition, Tradition::Carnatic);
        assert_eq!(resolved.raga_name(), "Bhairavi");

        let yaman = RagaRecord::Hindustani(HindustaniRaga {
            id: 2,
            raga_name: "Yaman".to_string(),
            ..Default::default()
        });
        let resolved = ResolvedRaga::new(Tradition::Hindustani, yaman).unwrap();
        assert_eq!(resolved.tradition, Tradition::Hindustani);
    }

    #[test]
    fn test_resolved_raga_rejects_record_from_other_tradition() {
        let rejected = ResolvedRaga::new(Tradition::Hindustani, carnatic("Todi")).unwrap_err();
        assert_eq!(rejected.raga_name(), "Todi");
    }

    #[test]
    fn test_outcome_accessors() {
        let found = ResolutionOutcome::Found(ResolvedRaga::new(Tradition::Carnatic, carnatic("Kalyani")).unwrap());
        assert!(found.is_found());
        assert!(found.resolved().is_some());
        assert!(found.failures().is_empty());
        assert!(found.message().is_none());

        let not_found = ResolutionOutcome::NotFound {
            query: "Zzznotaraga".to_string(),
            failures: vec![LookupFailure::new(Tradition::Carnatic, "HTTP 404")],
        };
        assert!(!not_found.is_found());
        assert!(not_found.resolved().is_none());
        assert_eq!(not_found.failures().len(), 1);
    }

    #[test]
    fn test_single_failure_message() {
        let outcome = ResolutionOutcome::NotFound {
            query: "Todi".to_string(),
            failures: vec![LookupFailure::new(Tradition::Carnatic, "Raga not found")],
        };
        assert_eq!(
            outcome.message().unwrap(),
            "Could not find raga \"Todi\" in the Carnatic catalog. Raga not found"
        );
    }

    #[test]
    fn test_exhausted_message_lists_attempts_in_order() {
        let outcome = ResolutionOutcome::NotFound {
            query: "Zzznotaraga".to_string(),
            failures: vec![
                LookupFailure::new(Tradition::Carnatic, "HTTP 404"),
                LookupFailure::new(Tradition::Hindustani, "connection refused"),
            ],
        };
        assert_eq!(
            outcome.message().unwrap(),
            "Could not find raga \"Zzznotaraga\" in the Hindustani or Carnatic catalogs. \
             Carnatic: HTTP 404; Hindustani: connection refused"
        );
    }

    #[test]
    fn test_state_display_and_terminal() {
        assert_eq!(ResolutionState::Trying(Tradition::Hindustani).to_string(), "trying_hindustani");
        assert!(!ResolutionState::NotStarted.is_terminal());
        assert!(ResolutionState::Succeeded.is_terminal());
        assert!(ResolutionState::ExhaustedFailed.is_terminal());
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = ResolutionOutcome::Found(ResolvedRaga::new(Tradition::Carnatic, carnatic("Kalyani")).unwrap());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "found");
        assert_eq!(json["tradition"], "carnatic");
    }
}
