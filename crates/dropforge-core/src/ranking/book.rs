use super::{rank_entries, RankedEntry};
use crate::coerce::non_empty_trimmed;
use crate::cohort::Cohort;
use crate::config::ScoreWeights;
use crate::error::{ForgeError, ForgeResult};
use crate::models::{AttackRankEntry, StatBlock};
use crate::protocol::{EntryPatchRequest, NewEntryRequest};
use crate::store::JsonStore;
use crate::util::{generate_id, timestamp_now};
use tracing::info;

/// Attack rank entries, one JSON file per cohort.
///
/// Only raw stats are stored. Scores are computed on every read so they
/// follow weight changes.
#[derive(Debug, Clone)]
pub struct RankBook {
    store: JsonStore,
}

impl RankBook {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    pub fn entries(&self, cohort: Cohort) -> ForgeResult<Vec<AttackRankEntry>> {
        self.store.read_list(cohort.store_file())
    }

    /// Entries scored with `base` capped at the cohort's crit cap, best first.
    pub fn ranked(&self, cohort: Cohort, base: &ScoreWeights) -> ForgeResult<Vec<RankedEntry>> {
        let entries = self.entries(cohort)?;
        Ok(rank_entries(entries, &cohort.weights(base)))
    }

    pub fn create(&self, cohort: Cohort, req: NewEntryRequest) -> ForgeResult<AttackRankEntry> {
        let name = non_empty_trimmed(req.name.as_deref())
            .ok_or_else(|| ForgeError::validation("name is required"))?;
        let character = non_empty_trimmed(req.character.as_deref());
        let stats = validated_stats(req.stats)?;

        let mut existing = self.entries(cohort)?;

        let entry = AttackRankEntry {
            id: generate_id("atk"),
            name,
            character,
            stats,
            updated_at: Some(timestamp_now()),
        };

        existing.push(entry.clone());
        self.store.write(cohort.store_file(), &existing)?;

        info!("🆕 [{}] Rank entry '{}' ({})", cohort, entry.name, entry.id);
        Ok(entry)
    }

    pub fn update(
        &self,
        cohort: Cohort,
        id: &str,
        patch: EntryPatchRequest,
    ) -> ForgeResult<AttackRankEntry> {
        require_id(id)?;

        let mut existing = self.entries(cohort)?;
        let idx = existing
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ForgeError::not_found("entry not found"))?;

        let prev = &existing[idx];
        let stats = validated_stats(patch.stats.unwrap_or(prev.stats))?;

        let name = match patch.name {
            Some(raw) => raw.trim().to_string(),
            None => prev.name.clone(),
        };
        if name.trim().is_empty() {
            return Err(ForgeError::validation("name is required"));
        }

        // An explicit empty character clears it.
        let character = match patch.character {
            Some(raw) => non_empty_trimmed(Some(&raw)),
            None => prev.character.clone(),
        };

        let updated = AttackRankEntry {
            id: prev.id.clone(),
            name,
            character,
            stats,
            updated_at: Some(timestamp_now()),
        };

        existing[idx] = updated.clone();
        self.store.write(cohort.store_file(), &existing)?;

        info!("✏️  [{}] Rank entry '{}' updated", cohort, updated.id);
        Ok(updated)
    }

    pub fn delete(&self, cohort: Cohort, id: &str) -> ForgeResult<()> {
        require_id(id)?;

        let existing = self.entries(cohort)?;
        let before = existing.len();
        let next: Vec<AttackRankEntry> = existing.into_iter().filter(|e| e.id != id).collect();

        if next.len() == before {
            return Err(ForgeError::not_found("entry not found"));
        }

        self.store.write(cohort.store_file(), &next)?;
        info!("🗑️  [{}] Rank entry '{}' removed", cohort, id);
        Ok(())
    }
}

fn require_id(id: &str) -> ForgeResult<()> {
    if id.trim().is_empty() {
        return Err(ForgeError::validation("id is required"));
    }
    Ok(())
}

fn validated_stats(stats: StatBlock) -> ForgeResult<StatBlock> {
    let stats = stats.normalized();
    if stats.attack <= 0.0 {
        return Err(ForgeError::validation("attack must be > 0"));
    }
    Ok(stats)
}
