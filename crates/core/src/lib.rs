pub mod catalog;
pub mod conflicts;
pub mod report;

use async_trait::async_trait;
use std::collections::HashSet;
use thiserror::Error;

pub use types::{
    ConflictKind, ConflictRecord, GenerationRequest, GenerationResult, Instance, Placement,
    SchoolConfig, TimeSlot,
};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("invalid school configuration: {0}")]
    Configuration(String),
    #[error("incomplete assignment data: {0}")]
    IncompleteAssignment(String),
}

pub fn validate(inst: &Instance) -> Result<(), GenerationError> {
    let mut errors: Vec<String> = Vec::new();

    fn chk_unique<I: ToString>(name: &str, ids: impl Iterator<Item = I>, errors: &mut Vec<String>) {
        let mut seen = HashSet::new();
        for id in ids {
            let s = id.to_string();
            if !seen.insert(s.clone()) {
                errors.push(format!("duplicate {name}: {s}"));
            }
        }
    }
    chk_unique(
        "educator id",
        inst.educators.iter().map(|x| &x.id.0),
        &mut errors,
    );
    chk_unique("class id", inst.classes.iter().map(|x| &x.id.0), &mut errors);
    chk_unique(
        "subject id",
        inst.subjects.iter().map(|x| &x.id.0),
        &mut errors,
    );
    chk_unique(
        "module id",
        inst.modules.iter().map(|x| &x.id.0),
        &mut errors,
    );
    chk_unique(
        "subject assignment",
        inst.subject_assignments
            .iter()
            .map(|a| format!("{}/{}/{}", a.teacher_id, a.class_id, a.subject_id)),
        &mut errors,
    );
    chk_unique(
        "module assignment",
        inst.module_assignments
            .iter()
            .map(|a| format!("{}/{}/{}", a.trainer_id, a.class_id, a.module_id)),
        &mut errors,
    );

    let educators: HashSet<_> = inst.educators.iter().map(|e| &e.id.0).collect();
    let classes: HashSet<_> = inst.classes.iter().map(|c| &c.id.0).collect();
    let subjects: HashSet<_> = inst.subjects.iter().map(|s| &s.id.0).collect();
    let modules: HashSet<_> = inst.modules.iter().map(|m| &m.id.0).collect();

    for a in &inst.subject_assignments {
        if !educators.contains(&a.teacher_id.0) {
            errors.push(format!(
                "assignment references missing teacher {}",
                a.teacher_id
            ));
        }
        if !classes.contains(&a.class_id.0) {
            errors.push(format!("assignment references missing class {}", a.class_id));
        }
        if !subjects.contains(&a.subject_id.0) {
            errors.push(format!(
                "assignment references missing subject {}",
                a.subject_id
            ));
        }
    }
    for a in &inst.module_assignments {
        if !educators.contains(&a.trainer_id.0) {
            errors.push(format!(
                "assignment references missing trainer {}",
                a.trainer_id
            ));
        }
        if !classes.contains(&a.class_id.0) {
            errors.push(format!("assignment references missing class {}", a.class_id));
        }
        if !modules.contains(&a.module_id.0) {
            errors.push(format!(
                "assignment references missing module {}",
                a.module_id
            ));
        }
    }

    let assigned_subjects: HashSet<&str> = inst
        .subject_assignments
        .iter()
        .map(|a| a.subject_id.0.as_str())
        .collect();
    for s in &inst.subjects {
        if assigned_subjects.contains(s.id.0.as_str()) && s.periods_per_week == 0 {
            errors.push(format!("subject {} has periods_per_week=0", s.id));
        }
    }

    let assigned_modules: HashSet<&str> = inst
        .module_assignments
        .iter()
        .map(|a| a.module_id.0.as_str())
        .collect();
    for m in &inst.modules {
        if !assigned_modules.contains(m.id.0.as_str()) {
            continue;
        }
        if m.total_hours == 0 {
            errors.push(format!("module {} has total_hours=0", m.id));
        }
        if m.block_size < types::MIN_TSS_BLOCK {
            errors.push(format!(
                "module {} has block_size={}, minimum is {}",
                m.id,
                m.block_size,
                types::MIN_TSS_BLOCK
            ));
        } else if m.total_hours % m.block_size != 0 {
            errors.push(format!(
                "module {} total_hours={} is not divisible by block_size={}",
                m.id, m.total_hours, m.block_size
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(GenerationError::IncompleteAssignment(errors.join("; ")))
    }
}

#[async_trait]
pub trait Generator: Send + Sync + 'static {
    async fn generate(&self, req: GenerationRequest) -> anyhow::Result<GenerationResult>;
}
