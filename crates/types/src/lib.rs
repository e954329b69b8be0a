use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub const MAX_TEACHING_PERIOD: u8 = 10;
pub const LAST_MORNING_PERIOD: u8 = 5;
pub const MAX_CONSECUTIVE_PERIODS: u8 = 2;
pub const MIN_TSS_BLOCK: u8 = 2;

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Clone, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq, Ord, PartialOrd, Hash,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}
id_newtype!(SchoolId);
id_newtype!(EducatorId);
id_newtype!(ClassId);
id_newtype!(SubjectId);
id_newtype!(ModuleId);

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    pub fn as_str(&self) -> &'static str {
        match self {
            Day::Mon => "mon",
            Day::Tue => "tue",
            Day::Wed => "wed",
            Day::Thu => "thu",
            Day::Fri => "fri",
            Day::Sat => "sat",
            Day::Sun => "sun",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SessionTag {
    Morning,
    Afternoon,
}

impl SessionTag {
    pub fn for_period(period: u8) -> SessionTag {
        if period <= LAST_MORNING_PERIOD {
            SessionTag::Morning
        } else {
            SessionTag::Afternoon
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct PeriodDef {
    pub number: u8,
    pub starts_at: String,
    pub ends_at: String,
    #[serde(default)]
    pub is_break: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct DayConfig {
    pub day: Day,
    pub periods: Vec<PeriodDef>,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct SchoolConfig {
    pub days: Vec<DayConfig>,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq, Hash)]
pub struct TimeSlot {
    pub day: Day,
    pub period: u8,
    pub starts_at: String,
    pub ends_at: String,
    pub session: SessionTag,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct Educator {
    pub id: EducatorId,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct SchoolClass {
    pub id: ClassId,
    #[serde(default)]
    pub level: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct Subject {
    pub id: SubjectId,
    #[serde(default)]
    pub level: Option<String>,
    pub periods_per_week: u8,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ModuleCategory {
    Specific,
    General,
    Complementary,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct Module {
    pub id: ModuleId,
    #[serde(default)]
    pub level: Option<String>,
    pub category: ModuleCategory,
    pub total_hours: u8,
    pub block_size: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct SubjectAssignment {
    pub teacher_id: EducatorId,
    pub class_id: ClassId,
    pub subject_id: SubjectId,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct ModuleAssignment {
    pub trainer_id: EducatorId,
    pub class_id: ClassId,
    pub module_id: ModuleId,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct Instance {
    pub educators: Vec<Educator>,
    pub classes: Vec<SchoolClass>,
    pub subjects: Vec<Subject>,
    pub modules: Vec<Module>,
    pub subject_assignments: Vec<SubjectAssignment>,
    pub module_assignments: Vec<ModuleAssignment>,
}

impl Instance {
    pub fn scoped_to_class(&self, class_id: &ClassId) -> Instance {
        let mut scoped = self.clone();
        scoped.subject_assignments.retain(|a| &a.class_id == class_id);
        scoped.module_assignments.retain(|a| &a.class_id == class_id);
        scoped
    }

    pub fn scoped_to_educator(&self, educator_id: &EducatorId) -> Instance {
        let mut scoped = self.clone();
        scoped
            .subject_assignments
            .retain(|a| &a.teacher_id == educator_id);
        scoped
            .module_assignments
            .retain(|a| &a.trainer_id == educator_id);
        scoped
    }
}

#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Primary,
    Secondary,
    Tss,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    Any,
    Morning,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LessonTopic {
    Subject(SubjectId),
    Module(ModuleId),
}

impl fmt::Display for LessonTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LessonTopic::Subject(id) => id.fmt(f),
            LessonTopic::Module(id) => id.fmt(f),
        }
    }
}

// Variant order is the sort order: every module category outranks every
// subject tier, and subject tiers rank by weekly period count.
#[derive(
    Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq, Ord, PartialOrd, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Subject(u8),
    Complementary,
    General,
    Specific,
}

impl Priority {
    pub fn for_subject(periods_per_week: u8) -> Priority {
        Priority::Subject(periods_per_week)
    }

    pub fn for_module(category: ModuleCategory) -> Priority {
        match category {
            ModuleCategory::Specific => Priority::Specific,
            ModuleCategory::General => Priority::General,
            ModuleCategory::Complementary => Priority::Complementary,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq)]
pub struct LessonRequirement {
    pub educator_id: EducatorId,
    pub class_id: ClassId,
    pub topic: LessonTopic,
    pub kind: LessonKind,
    pub priority: Priority,
    pub block_size: u8,
    pub preferred_time: PreferredTime,
    pub unit_index: u8,
    pub unit_count: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq)]
pub struct Placement {
    pub educator_id: EducatorId,
    pub class_id: ClassId,
    pub topic: LessonTopic,
    pub kind: LessonKind,
    pub day: Day,
    pub period: u8,
    pub block_size: u8,
    pub block_offset: u8,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConflictKind {
    DoubleBooking,
    TooManyConsecutive,
    BlockBoundaryExceeded,
    Unschedulable,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema, Eq, PartialEq)]
pub struct ConflictRecord {
    pub kind: ConflictKind,
    pub message: String,
    #[serde(default)]
    pub educator_id: Option<EducatorId>,
    #[serde(default)]
    pub class_id: Option<ClassId>,
    #[serde(default)]
    pub day: Option<Day>,
    #[serde(default)]
    pub period: Option<u8>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema, Eq, PartialEq)]
pub struct GenerationStats {
    pub requirements: usize,
    pub placed: usize,
    pub unplaced: usize,
    pub by_kind: BTreeMap<LessonKind, usize>,
    pub by_educator: BTreeMap<EducatorId, usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct GenerationResult {
    pub success: bool,
    pub placements: Vec<Placement>,
    pub conflicts: Vec<ConflictRecord>,
    pub stats: GenerationStats,
}

#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    pub school_id: SchoolId,
    pub config: SchoolConfig,
    pub instance: Instance,
}
