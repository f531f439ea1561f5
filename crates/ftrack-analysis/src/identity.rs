//! Embedding-based speaker identity resolution.
//!
//! Pure nearest-neighbor against a single reference embedding per
//! identity. References are fixed at first registration and entries are
//! never merged, so gradual appearance drift increases mismatch risk —
//! a known limitation of this scheme, kept deliberately.

use tracing::debug;

/// Default embedding distance below which two faces match.
pub const DEFAULT_MATCH_THRESHOLD: f32 = 0.6;

/// One registered speaker identity.
#[derive(Debug, Clone)]
pub struct RegistryEntry {
    /// Stable label, `speaker_{n}` in first-seen order
    pub speaker_id: String,
    /// The identity's sole reference embedding, fixed at registration
    pub reference_embedding: Vec<f32>,
}

/// Append-only registry of known speakers for one run.
///
/// Speaker indices start at 1 and are never reused. The registry is
/// scoped to a run context, not process-wide, so concurrent analyses
/// stay isolated.
#[derive(Debug)]
pub struct SpeakerRegistry {
    entries: Vec<RegistryEntry>,
    next_index: u64,
    match_threshold: f32,
}

impl SpeakerRegistry {
    /// Create an empty registry with the given match threshold.
    pub fn new(match_threshold: f32) -> Self {
        Self {
            entries: Vec::new(),
            next_index: 1,
            match_threshold,
        }
    }

    /// Resolve an embedding to a stable speaker id.
    ///
    /// Returns the id of the nearest registered entry when its distance
    /// is below the match threshold (ties go to the first-registered
    /// entry); otherwise registers the embedding as a new identity and
    /// returns the fresh id.
    pub fn resolve(&mut self, embedding: &[f32]) -> String {
        let nearest = self
            .entries
            .iter()
            .map(|entry| euclidean_distance(embedding, &entry.reference_embedding))
            .enumerate()
            // Strict comparison keeps the first-registered entry on ties.
            .fold(None, |best: Option<(usize, f32)>, (idx, dist)| match best {
                Some((_, best_dist)) if best_dist <= dist => best,
                _ => Some((idx, dist)),
            });

        match nearest {
            Some((idx, dist)) if dist < self.match_threshold => {
                self.entries[idx].speaker_id.clone()
            }
            _ => {
                let speaker_id = format!("speaker_{}", self.next_index);
                self.next_index += 1;
                self.entries.push(RegistryEntry {
                    speaker_id: speaker_id.clone(),
                    reference_embedding: embedding.to_vec(),
                });
                debug!(speaker_id = %speaker_id, "registered new speaker");
                speaker_id
            }
        }
    }

    /// Number of registered speakers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no speaker has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered entries in first-seen order.
    pub fn entries(&self) -> &[RegistryEntry] {
        &self.entries
    }
}

/// Euclidean distance between two embeddings of equal length.
pub fn euclidean_distance(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}
