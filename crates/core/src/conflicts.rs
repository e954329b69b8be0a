use std::collections::BTreeMap;
use types::{
    ClassId, ConflictKind, ConflictRecord, Day, EducatorId, LessonTopic, Placement,
    MAX_CONSECUTIVE_PERIODS, MAX_TEACHING_PERIOD,
};

pub fn validate_placements(placements: &[Placement]) -> Vec<ConflictRecord> {
    let mut conflicts = Vec::new();

    let mut educator_slots: BTreeMap<(&EducatorId, Day, u8), Vec<&Placement>> = BTreeMap::new();
    let mut class_slots: BTreeMap<(&ClassId, Day, u8), Vec<&Placement>> = BTreeMap::new();
    for p in placements {
        educator_slots
            .entry((&p.educator_id, p.day, p.period))
            .or_default()
            .push(p);
        class_slots
            .entry((&p.class_id, p.day, p.period))
            .or_default()
            .push(p);
    }

    for ((educator_id, day, period), group) in &educator_slots {
        if group.len() > 1 {
            let classes: Vec<&str> = group.iter().map(|p| p.class_id.0.as_str()).collect();
            conflicts.push(ConflictRecord {
                kind: ConflictKind::DoubleBooking,
                message: format!(
                    "educator {} has {} lessons on {} period {} (classes {})",
                    educator_id,
                    group.len(),
                    day.as_str(),
                    period,
                    classes.join(", ")
                ),
                educator_id: Some((*educator_id).clone()),
                class_id: None,
                day: Some(*day),
                period: Some(*period),
            });
        }
    }
    for ((class_id, day, period), group) in &class_slots {
        if group.len() > 1 {
            let educators: Vec<&str> = group.iter().map(|p| p.educator_id.0.as_str()).collect();
            conflicts.push(ConflictRecord {
                kind: ConflictKind::DoubleBooking,
                message: format!(
                    "class {} has {} lessons on {} period {} (educators {})",
                    class_id,
                    group.len(),
                    day.as_str(),
                    period,
                    educators.join(", ")
                ),
                educator_id: None,
                class_id: Some((*class_id).clone()),
                day: Some(*day),
                period: Some(*period),
            });
        }
    }

    let mut educator_days: BTreeMap<(&EducatorId, Day), Vec<u8>> = BTreeMap::new();
    for p in placements {
        educator_days
            .entry((&p.educator_id, p.day))
            .or_default()
            .push(p.period);
    }
    for ((educator_id, day), mut periods) in educator_days {
        periods.sort_unstable();
        periods.dedup();
        let mut run_start = 0usize;
        for i in 1..=periods.len() {
            let run_ended = i == periods.len() || periods[i] != periods[i - 1] + 1;
            if !run_ended {
                continue;
            }
            let len = i - run_start;
            if len > MAX_CONSECUTIVE_PERIODS as usize {
                conflicts.push(ConflictRecord {
                    kind: ConflictKind::TooManyConsecutive,
                    message: format!(
                        "educator {} teaches {} consecutive periods on {} (periods {}-{})",
                        educator_id,
                        len,
                        day.as_str(),
                        periods[run_start],
                        periods[i - 1]
                    ),
                    educator_id: Some(educator_id.clone()),
                    class_id: None,
                    day: Some(day),
                    period: Some(periods[run_start]),
                });
            }
            run_start = i;
        }
    }

    // block units are tied back together through their start period
    let mut blocks: BTreeMap<(&EducatorId, &ClassId, &LessonTopic, Day, i16), Vec<&Placement>> =
        BTreeMap::new();
    for p in placements.iter().filter(|p| p.block_size > 1) {
        let start = p.period as i16 - p.block_offset as i16;
        blocks
            .entry((&p.educator_id, &p.class_id, &p.topic, p.day, start))
            .or_default()
            .push(p);
    }
    for ((educator_id, class_id, topic, day, _start), units) in blocks {
        let size = units[0].block_size;
        let mut offsets: Vec<u8> = units.iter().map(|u| u.block_offset).collect();
        offsets.sort_unstable();
        offsets.dedup();
        let complete = offsets.len() == size as usize
            && offsets.first() == Some(&0)
            && offsets.windows(2).all(|w| w[1] == w[0] + 1);
        let last_period = units.iter().map(|u| u.period).max().unwrap_or(0);
        if !complete {
            conflicts.push(ConflictRecord {
                kind: ConflictKind::BlockBoundaryExceeded,
                message: format!(
                    "block of {} for class {} on {} is fragmented ({} of {} periods present)",
                    topic,
                    class_id,
                    day.as_str(),
                    offsets.len(),
                    size
                ),
                educator_id: Some(educator_id.clone()),
                class_id: Some(class_id.clone()),
                day: Some(day),
                period: Some(units[0].period),
            });
        } else if last_period > MAX_TEACHING_PERIOD {
            conflicts.push(ConflictRecord {
                kind: ConflictKind::BlockBoundaryExceeded,
                message: format!(
                    "block of {} for class {} on {} runs past period {}",
                    topic,
                    class_id,
                    day.as_str(),
                    MAX_TEACHING_PERIOD
                ),
                educator_id: Some(educator_id.clone()),
                class_id: Some(class_id.clone()),
                day: Some(day),
                period: Some(last_period),
            });
        }
    }

    conflicts
}
