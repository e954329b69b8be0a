#![allow(dead_code)]

use types::{
    ClassId, Day, DayConfig, Educator, EducatorId, GenerationRequest, Instance, Module,
    ModuleAssignment, ModuleCategory, ModuleId, PeriodDef, SchoolClass, SchoolConfig, SchoolId,
    Subject, SubjectAssignment, SubjectId,
};

pub fn standard_week() -> SchoolConfig {
    week_of(&[Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri])
}

pub fn week_of(days: &[Day]) -> SchoolConfig {
    SchoolConfig {
        days: days
            .iter()
            .map(|&day| DayConfig { day, periods: standard_periods() })
            .collect(),
    }
}

// ten 40-minute periods from 08:00, a short break after period 2 and
// lunch after period 5
pub fn standard_periods() -> Vec<PeriodDef> {
    let mut periods = Vec::new();
    let mut minutes = 8 * 60;
    for number in 1..=10u8 {
        let starts_at = hhmm(minutes);
        minutes += 40;
        periods.push(PeriodDef {
            number,
            starts_at,
            ends_at: hhmm(minutes),
            is_break: false,
        });
        if number == 2 || number == 5 {
            let starts_at = hhmm(minutes);
            minutes += if number == 5 { 60 } else { 20 };
            periods.push(PeriodDef {
                number: 0,
                starts_at,
                ends_at: hhmm(minutes),
                is_break: true,
            });
        }
    }
    periods
}

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

pub fn educator(id: &str) -> Educator {
    Educator { id: EducatorId(id.into()), name: None }
}

pub fn class(id: &str, level: Option<&str>) -> SchoolClass {
    SchoolClass { id: ClassId(id.into()), level: level.map(Into::into) }
}

pub fn subject(id: &str, periods_per_week: u8) -> Subject {
    Subject { id: SubjectId(id.into()), level: None, periods_per_week }
}

pub fn module(id: &str, category: ModuleCategory, total_hours: u8, block_size: u8) -> Module {
    Module {
        id: ModuleId(id.into()),
        level: None,
        category,
        total_hours,
        block_size,
    }
}

pub fn teach(teacher: &str, class: &str, subject: &str) -> SubjectAssignment {
    SubjectAssignment {
        teacher_id: EducatorId(teacher.into()),
        class_id: ClassId(class.into()),
        subject_id: SubjectId(subject.into()),
    }
}

pub fn train(trainer: &str, class: &str, module: &str) -> ModuleAssignment {
    ModuleAssignment {
        trainer_id: EducatorId(trainer.into()),
        class_id: ClassId(class.into()),
        module_id: ModuleId(module.into()),
    }
}

pub fn empty_instance() -> Instance {
    Instance {
        educators: vec![],
        classes: vec![],
        subjects: vec![],
        modules: vec![],
        subject_assignments: vec![],
        module_assignments: vec![],
    }
}

pub fn request(instance: Instance) -> GenerationRequest {
    request_with(standard_week(), instance)
}

pub fn request_with(config: SchoolConfig, instance: Instance) -> GenerationRequest {
    GenerationRequest {
        school_id: SchoolId("sch-1".into()),
        config,
        instance,
    }
}
