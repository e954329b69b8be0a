use crate::GenerationError;
use std::collections::{HashMap, HashSet};
use tracing::debug;
use types::{Day, SchoolConfig, SessionTag, TimeSlot, MAX_TEACHING_PERIOD};

pub fn build_catalog(config: &SchoolConfig) -> Result<Vec<TimeSlot>, GenerationError> {
    let mut errors: Vec<String> = Vec::new();
    let mut seen: HashSet<(Day, u8)> = HashSet::new();
    let mut usable: HashMap<Day, usize> = HashMap::new();
    let mut day_order: Vec<Day> = Vec::new();
    let mut slots: Vec<TimeSlot> = Vec::new();

    for day_cfg in &config.days {
        if !usable.contains_key(&day_cfg.day) {
            day_order.push(day_cfg.day);
        }
        let count = usable.entry(day_cfg.day).or_insert(0);
        for p in &day_cfg.periods {
            // breaks and anything outside the teaching window never reach the catalog
            if p.is_break || p.number == 0 || p.number > MAX_TEACHING_PERIOD {
                continue;
            }
            if !seen.insert((day_cfg.day, p.number)) {
                errors.push(format!(
                    "duplicate period {} on {}",
                    p.number,
                    day_cfg.day.as_str()
                ));
                continue;
            }
            slots.push(TimeSlot {
                day: day_cfg.day,
                period: p.number,
                starts_at: p.starts_at.clone(),
                ends_at: p.ends_at.clone(),
                session: SessionTag::for_period(p.number),
            });
            *count += 1;
        }
    }

    for day in &day_order {
        if usable[day] == 0 {
            errors.push(format!("day {} has no usable teaching periods", day.as_str()));
        }
    }
    if slots.is_empty() && errors.is_empty() {
        errors.push("slot catalog is empty".into());
    }

    if !errors.is_empty() {
        return Err(GenerationError::Configuration(errors.join("; ")));
    }

    slots.sort_by_key(|s| (s.day, s.period));
    debug!(slots = slots.len(), "built slot catalog");
    Ok(slots)
}
