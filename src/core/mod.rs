//! 한글 자모 분류, 음절 조합/분해

pub mod hangul_fsm;
pub mod jamo;
pub mod unicode;

pub use hangul_fsm::HangulFsm;
pub use jamo::{Jamo, JamoKind};
