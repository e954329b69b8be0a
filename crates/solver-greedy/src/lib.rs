pub mod expand;
pub mod place;

use async_trait::async_trait;
use timetable_core::{catalog::build_catalog, conflicts::validate_placements, report::summarize};
use timetable_core::{Generator, GenerationRequest, GenerationResult};
use tracing::info;

pub use expand::expand_lessons;
pub use place::{schedule, Occupancy};

pub struct GreedyScheduler;

impl GreedyScheduler {
    pub fn new() -> Self {
        Self
    }
}

pub fn generate_timetable(req: &GenerationRequest) -> anyhow::Result<GenerationResult> {
    let slots = build_catalog(&req.config)?;
    timetable_core::validate(&req.instance)?;
    let requirements = expand_lessons(&req.instance)?;
    info!(
        school = %req.school_id,
        requirements = requirements.len(),
        slots = slots.len(),
        "starting timetable generation"
    );

    let total = requirements.len();
    let mut occupancy = Occupancy::new();
    let (placements, mut conflicts) = schedule(&requirements, &slots, &mut occupancy);
    // the engine refuses illegal slots up front; this is the integrity pass
    // over what it committed
    conflicts.extend(validate_placements(&placements));

    let result = summarize(total, placements, conflicts);
    info!(
        school = %req.school_id,
        placed = result.stats.placed,
        unplaced = result.stats.unplaced,
        conflicts = result.conflicts.len(),
        success = result.success,
        "timetable generation finished"
    );
    Ok(result)
}

#[async_trait]
impl Generator for GreedyScheduler {
    async fn generate(&self, req: GenerationRequest) -> anyhow::Result<GenerationResult> {
        generate_timetable(&req)
    }
}
