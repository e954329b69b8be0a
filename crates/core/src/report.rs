use std::collections::BTreeMap;
use types::{ConflictRecord, EducatorId, GenerationResult, GenerationStats, LessonKind, Placement};

pub fn summarize(
    requirements: usize,
    placements: Vec<Placement>,
    conflicts: Vec<ConflictRecord>,
) -> GenerationResult {
    let mut by_kind: BTreeMap<LessonKind, usize> = BTreeMap::new();
    let mut by_educator: BTreeMap<EducatorId, usize> = BTreeMap::new();
    for p in &placements {
        *by_kind.entry(p.kind).or_default() += 1;
        *by_educator.entry(p.educator_id.clone()).or_default() += 1;
    }

    let stats = GenerationStats {
        requirements,
        placed: placements.len(),
        unplaced: requirements.saturating_sub(placements.len()),
        by_kind,
        by_educator,
    };
    let success = conflicts.is_empty() && placements.len() == requirements;

    GenerationResult {
        success,
        placements,
        conflicts,
        stats,
    }
}
