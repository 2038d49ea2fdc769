use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "assignment.ts")]
pub enum AssignmentState {
    Draft,     // 草稿
    Submitted, // 已提交
    Graded,    // 已评分
}

impl AssignmentState {
    pub const DRAFT: &'static str = "DRAFT";
    pub const SUBMITTED: &'static str = "SUBMITTED";
    pub const GRADED: &'static str = "GRADED";

    /// 教师/校长可见的状态
    pub fn visible_to_graders() -> &'static [AssignmentState] {
        &[Self::Submitted, Self::Graded]
    }

    /// 状态迁移表
    ///
    /// 草稿只能提交；已提交和已评分都可以（重新）评分；任何状态都不能回到草稿。
    pub fn can_transition_to(&self, next: AssignmentState) -> bool {
        match (self, next) {
            (AssignmentState::Draft, AssignmentState::Submitted) => true,
            (AssignmentState::Draft, AssignmentState::Draft)
            | (AssignmentState::Draft, AssignmentState::Graded) => false,
            (AssignmentState::Submitted, AssignmentState::Graded) => true,
            (AssignmentState::Submitted, AssignmentState::Draft)
            | (AssignmentState::Submitted, AssignmentState::Submitted) => false,
            (AssignmentState::Graded, AssignmentState::Graded) => true,
            (AssignmentState::Graded, AssignmentState::Draft)
            | (AssignmentState::Graded, AssignmentState::Submitted) => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentState::Draft => Self::DRAFT,
            AssignmentState::Submitted => Self::SUBMITTED,
            AssignmentState::Graded => Self::GRADED,
        }
    }
}

impl<'de> Deserialize<'de> for AssignmentState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<AssignmentState>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的作业状态: '{s}'. 支持的状态: DRAFT, SUBMITTED, GRADED"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AssignmentState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AssignmentState::DRAFT => Ok(AssignmentState::Draft),
            AssignmentState::SUBMITTED => Ok(AssignmentState::Submitted),
            AssignmentState::GRADED => Ok(AssignmentState::Graded),
            _ => Err(format!("Invalid assignment state: {s}")),
        }
    }
}

// 作业等级
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "assignment.ts")]
pub enum Grade {
    A,
    B,
    C,
    D,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
        }
    }
}

impl<'de> Deserialize<'de> for Grade {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Grade>().map_err(|_| {
            serde::de::Error::custom(format!("无效的等级: '{s}'. 支持的等级: A, B, C, D"))
        })
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            _ => Err(format!("Invalid grade: {s}")),
        }
    }
}

/// 是否允许直接给草稿评分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftGrading {
    #[default]
    Reject,
    Allow,
}

impl DraftGrading {
    pub fn from_flag(allow: bool) -> Self {
        if allow {
            DraftGrading::Allow
        } else {
            DraftGrading::Reject
        }
    }
}

// 作业实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 所属学生 ID，创建后不可变
    pub student_id: i64,
    // 批改教师 ID，提交时设置
    pub teacher_id: Option<i64>,
    // 作业内容，仅草稿状态可为空
    pub content: Option<String>,
    // 等级，仅评分时设置
    pub grade: Option<Grade>,
    pub state: AssignmentState,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Assignment {
    pub fn is_draft(&self) -> bool {
        self.state == AssignmentState::Draft
    }

    pub fn is_owned_by(&self, student_id: i64) -> bool {
        self.student_id == student_id
    }
}
