use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use solver_greedy::generate_timetable;
use std::hint::black_box;
use types::{
    ClassId, Day, DayConfig, Educator, EducatorId, GenerationRequest, Instance, Module,
    ModuleAssignment, ModuleCategory, ModuleId, PeriodDef, SchoolClass, SchoolConfig, SchoolId,
    Subject, SubjectAssignment, SubjectId,
};

fn standard_week() -> SchoolConfig {
    let periods: Vec<PeriodDef> = (1..=10u8)
        .map(|number| PeriodDef {
            number,
            starts_at: String::new(),
            ends_at: String::new(),
            is_break: false,
        })
        .collect();
    SchoolConfig {
        days: [Day::Mon, Day::Tue, Day::Wed, Day::Thu, Day::Fri]
            .iter()
            .map(|&day| DayConfig { day, periods: periods.clone() })
            .collect(),
    }
}

/// Five subjects per class spread round-robin over the teaching staff,
/// plus a welding-style block module for every second class.
fn school_request(teachers: usize, classes: usize) -> GenerationRequest {
    let mut inst = Instance {
        educators: (0..teachers)
            .map(|i| Educator { id: EducatorId(format!("t{i}")), name: None })
            .collect(),
        classes: (0..classes)
            .map(|i| SchoolClass { id: ClassId(format!("c{i}")), level: None })
            .collect(),
        subjects: vec![],
        modules: vec![],
        subject_assignments: vec![],
        module_assignments: vec![],
    };

    for class_ix in 0..classes {
        for k in 0..5 {
            let subject_id = format!("s{class_ix}-{k}");
            inst.subjects.push(Subject {
                id: SubjectId(subject_id.clone()),
                level: None,
                periods_per_week: 3 + (k % 3) as u8,
            });
            inst.subject_assignments.push(SubjectAssignment {
                teacher_id: EducatorId(format!("t{}", (class_ix * 5 + k) % teachers)),
                class_id: ClassId(format!("c{class_ix}")),
                subject_id: SubjectId(subject_id),
            });
        }
    }

    for class_ix in (0..classes).step_by(2) {
        let module_id = format!("m{class_ix}");
        inst.educators.push(Educator {
            id: EducatorId(format!("r{class_ix}")),
            name: None,
        });
        inst.modules.push(Module {
            id: ModuleId(module_id.clone()),
            level: None,
            category: ModuleCategory::Specific,
            total_hours: 4,
            block_size: 2,
        });
        inst.module_assignments.push(ModuleAssignment {
            trainer_id: EducatorId(format!("r{class_ix}")),
            class_id: ClassId(format!("c{class_ix}")),
            module_id: ModuleId(module_id),
        });
    }

    GenerationRequest {
        school_id: SchoolId("bench".into()),
        config: standard_week(),
        instance: inst,
    }
}

fn bench_generate_timetable(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_timetable");
    for (teachers, classes) in [(6, 4), (18, 12), (36, 24)] {
        let req = school_request(teachers, classes);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{teachers}t-{classes}c")),
            &req,
            |b, req| {
                b.iter(|| generate_timetable(black_box(req)).unwrap());
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate_timetable);
criterion_main!(benches);
