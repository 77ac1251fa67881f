//! Decision model command handlers.

mod record_judgment;

pub use record_judgment::{
    JudgmentSubject, RecordJudgmentCommand, RecordJudgmentHandler, RecordJudgmentResult,
};
