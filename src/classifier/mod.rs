//! 판정 단계
//!
//! 낱자모 검출, 정규화, 사전 매칭 결과를 조합해 none/soft/strict 중 하나로 판정합니다.

mod guard;
mod input;
mod result;

pub use guard::{check_profanity, ProfanityGuard};
pub use input::RawInput;
pub use result::{Analysis, Classification, Level, BARE_JAMO_ONLY, EMBEDDED_JAMO_RUN};
