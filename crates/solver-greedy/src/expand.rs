use std::collections::{HashMap, HashSet};
use timetable_core::GenerationError;
use types::{
    Instance, LessonKind, LessonRequirement, LessonTopic, PreferredTime, Priority,
};

pub fn expand_lessons(inst: &Instance) -> Result<Vec<LessonRequirement>, GenerationError> {
    let educators: HashSet<&str> = inst.educators.iter().map(|e| e.id.0.as_str()).collect();
    let class_levels: HashMap<&str, Option<&str>> = inst
        .classes
        .iter()
        .map(|c| (c.id.0.as_str(), c.level.as_deref()))
        .collect();
    let subjects: HashMap<&str, &types::Subject> =
        inst.subjects.iter().map(|s| (s.id.0.as_str(), s)).collect();
    let modules: HashMap<&str, &types::Module> =
        inst.modules.iter().map(|m| (m.id.0.as_str(), m)).collect();

    let mut requirements: Vec<LessonRequirement> = Vec::new();

    for a in &inst.subject_assignments {
        if !educators.contains(a.teacher_id.0.as_str()) {
            return Err(missing("teacher", &a.teacher_id.0));
        }
        let class_level = class_levels
            .get(a.class_id.0.as_str())
            .ok_or_else(|| missing("class", &a.class_id.0))?;
        let subject = subjects
            .get(a.subject_id.0.as_str())
            .copied()
            .ok_or_else(|| missing("subject", &a.subject_id.0))?;

        let level = resolve_level(*class_level, subject.level.as_deref());
        let kind = if level.starts_with('S') {
            LessonKind::Secondary
        } else {
            LessonKind::Primary
        };
        let count = subject.periods_per_week;
        for unit_index in 1..=count {
            requirements.push(LessonRequirement {
                educator_id: a.teacher_id.clone(),
                class_id: a.class_id.clone(),
                topic: LessonTopic::Subject(subject.id.clone()),
                kind,
                priority: Priority::for_subject(count),
                block_size: 1,
                preferred_time: PreferredTime::Any,
                unit_index,
                unit_count: count,
            });
        }
    }

    for a in &inst.module_assignments {
        if !educators.contains(a.trainer_id.0.as_str()) {
            return Err(missing("trainer", &a.trainer_id.0));
        }
        if !class_levels.contains_key(a.class_id.0.as_str()) {
            return Err(missing("class", &a.class_id.0));
        }
        let module = modules
            .get(a.module_id.0.as_str())
            .copied()
            .ok_or_else(|| missing("module", &a.module_id.0))?;

        let count = module.total_hours;
        for unit_index in 1..=count {
            requirements.push(LessonRequirement {
                educator_id: a.trainer_id.clone(),
                class_id: a.class_id.clone(),
                topic: LessonTopic::Module(module.id.clone()),
                kind: LessonKind::Tss,
                priority: Priority::for_module(module.category),
                block_size: module.block_size,
                preferred_time: PreferredTime::Morning,
                unit_index,
                unit_count: count,
            });
        }
    }

    if requirements.is_empty() {
        return Err(GenerationError::IncompleteAssignment(
            "no lesson requirements to schedule".into(),
        ));
    }

    // stable sort keeps the units of each lesson group adjacent
    requirements.sort_by(|a, b| b.priority.cmp(&a.priority));
    Ok(requirements)
}

fn resolve_level<'a>(class_level: Option<&'a str>, topic_level: Option<&'a str>) -> &'a str {
    class_level.or(topic_level).unwrap_or("Unknown")
}

fn missing(relation: &str, id: &str) -> GenerationError {
    GenerationError::IncompleteAssignment(format!(
        "assignment references missing {relation} {id}"
    ))
}
