use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};
use types::{
    ClassId, ConflictKind, ConflictRecord, Day, EducatorId, LessonRequirement, Placement,
    PreferredTime, TimeSlot, LAST_MORNING_PERIOD, MAX_CONSECUTIVE_PERIODS, MAX_TEACHING_PERIOD,
};

#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    educators: HashMap<EducatorId, HashSet<(Day, u8)>>,
    classes: HashMap<ClassId, HashSet<(Day, u8)>>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_placements(placements: &[Placement]) -> Self {
        let mut occupancy = Self::default();
        for p in placements {
            occupancy.mark(&p.educator_id, &p.class_id, p.day, p.period);
        }
        occupancy
    }

    pub fn educator_free(&self, educator_id: &EducatorId, day: Day, period: u8) -> bool {
        self.educators
            .get(educator_id)
            .map_or(true, |slots| !slots.contains(&(day, period)))
    }

    pub fn class_free(&self, class_id: &ClassId, day: Day, period: u8) -> bool {
        self.classes
            .get(class_id)
            .map_or(true, |slots| !slots.contains(&(day, period)))
    }

    fn mark(&mut self, educator_id: &EducatorId, class_id: &ClassId, day: Day, period: u8) {
        self.educators
            .entry(educator_id.clone())
            .or_default()
            .insert((day, period));
        self.classes
            .entry(class_id.clone())
            .or_default()
            .insert((day, period));
    }
}

pub fn schedule(
    requirements: &[LessonRequirement],
    slots: &[TimeSlot],
    occupancy: &mut Occupancy,
) -> (Vec<Placement>, Vec<ConflictRecord>) {
    let available: HashSet<(Day, u8)> = slots.iter().map(|s| (s.day, s.period)).collect();

    let mut placements: Vec<Placement> = Vec::new();
    let mut conflicts: Vec<ConflictRecord> = Vec::new();

    let mut i = 0usize;
    while i < requirements.len() {
        let req = &requirements[i];
        let size = req.block_size.max(1) as usize;
        let group = requirements[i..]
            .iter()
            .take(size)
            .take_while(|r| {
                r.educator_id == req.educator_id
                    && r.class_id == req.class_id
                    && r.topic == req.topic
            })
            .count();

        if group < size {
            // a short run of units can never fill its block
            conflicts.push(unschedulable(req, group as u8));
            i += group;
            continue;
        }

        match find_block_start(req, size as u8, slots, &available, occupancy) {
            Some((day, start)) => {
                for offset in 0..size as u8 {
                    let period = start + offset;
                    occupancy.mark(&req.educator_id, &req.class_id, day, period);
                    placements.push(Placement {
                        educator_id: req.educator_id.clone(),
                        class_id: req.class_id.clone(),
                        topic: req.topic.clone(),
                        kind: req.kind,
                        day,
                        period,
                        block_size: size as u8,
                        block_offset: offset,
                    });
                }
                debug!(
                    educator = %req.educator_id,
                    class = %req.class_id,
                    topic = %req.topic,
                    day = day.as_str(),
                    period = start,
                    size,
                    "placed lesson"
                );
            }
            None => {
                warn!(
                    educator = %req.educator_id,
                    class = %req.class_id,
                    topic = %req.topic,
                    size,
                    "no legal slot found"
                );
                conflicts.push(unschedulable(req, size as u8));
            }
        }
        i += size;
    }

    (placements, conflicts)
}

fn find_block_start(
    req: &LessonRequirement,
    size: u8,
    slots: &[TimeSlot],
    available: &HashSet<(Day, u8)>,
    occupancy: &Occupancy,
) -> Option<(Day, u8)> {
    for slot in slots {
        let start = slot.period;
        if req.preferred_time == PreferredTime::Morning && start > LAST_MORNING_PERIOD {
            continue;
        }
        let end = start as u16 + size as u16 - 1;
        if end > MAX_TEACHING_PERIOD as u16 {
            continue;
        }
        let end = end as u8;

        let span_free = (start..=end).all(|period| {
            available.contains(&(slot.day, period))
                && occupancy.educator_free(&req.educator_id, slot.day, period)
                && occupancy.class_free(&req.class_id, slot.day, period)
        });
        if !span_free {
            continue;
        }
        if run_length(occupancy, &req.educator_id, slot.day, start, end)
            > MAX_CONSECUTIVE_PERIODS
        {
            continue;
        }
        return Some((slot.day, start));
    }
    None
}

// length of the occupied run the candidate span would create, counting
// adjacent periods the educator already holds on that day
fn run_length(
    occupancy: &Occupancy,
    educator_id: &EducatorId,
    day: Day,
    start: u8,
    end: u8,
) -> u8 {
    let mut len = end - start + 1;
    let mut before = start;
    while before > 1 && !occupancy.educator_free(educator_id, day, before - 1) {
        len += 1;
        before -= 1;
    }
    let mut after = end;
    while after < MAX_TEACHING_PERIOD && !occupancy.educator_free(educator_id, day, after + 1) {
        len += 1;
        after += 1;
    }
    len
}

fn unschedulable(req: &LessonRequirement, units: u8) -> ConflictRecord {
    let message = if units > 1 {
        format!(
            "no legal run of {} periods for {} taught by {} to class {}",
            units, req.topic, req.educator_id, req.class_id
        )
    } else {
        format!(
            "no legal slot for {} taught by {} to class {}",
            req.topic, req.educator_id, req.class_id
        )
    };
    ConflictRecord {
        kind: ConflictKind::Unschedulable,
        message,
        educator_id: Some(req.educator_id.clone()),
        class_id: Some(req.class_id.clone()),
        day: None,
        period: None,
    }
}
