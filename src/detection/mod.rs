//! 낱자모 우회 입력 검출 모듈

mod jamo_purity;

pub use jamo_purity::{has_bare_jamo_run, is_bare_jamo, DEFAULT_MIN_JAMO_RUN};
pub(crate) use jamo_purity::{has_bare_jamo_run_cleaned, is_bare_jamo_cleaned};
