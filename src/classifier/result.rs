//! 판정 결과 타입

use serde::{Deserialize, Serialize};

use crate::lexicon::{LexiconHit, Severity};
use crate::normalize::NormalizedText;

/// 입력 전체가 낱자모일 때의 근거 태그
pub const BARE_JAMO_ONLY: &str = "bare jamo only";
/// 문장 안에 연속 낱자모가 있을 때의 근거 태그
pub const EMBEDDED_JAMO_RUN: &str = "embedded jamo run";

/// 심각도 단계 (None < Soft < Strict)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    None,
    Soft,
    Strict,
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Soft => Level::Soft,
            Severity::Strict => Level::Strict,
        }
    }
}

/// 판정 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub level: Level,
    /// 판정 근거 (패턴 원문 또는 태그). None이면 비어 있음
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<String>,
}

impl Classification {
    pub fn none() -> Self {
        Self {
            level: Level::None,
            evidence: Vec::new(),
        }
    }

    pub fn strict(evidence: impl Into<String>) -> Self {
        Self {
            level: Level::Strict,
            evidence: vec![evidence.into()],
        }
    }

    pub fn soft(evidence: impl Into<String>) -> Self {
        Self {
            level: Level::Soft,
            evidence: vec![evidence.into()],
        }
    }

    /// 제출을 막아야 하는지 (soft, strict 모두 차단)
    pub fn is_blocked(&self) -> bool {
        self.level != Level::None
    }
}

impl From<LexiconHit> for Classification {
    fn from(hit: LexiconHit) -> Self {
        Self {
            level: hit.severity.into(),
            evidence: vec![hit.pattern],
        }
    }
}

/// 모든 단계를 끝까지 계산한 진단 결과
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    /// 정리된 원본 입력
    pub original: String,
    /// 1~3단계 결과 (낱자모 검출 대상)
    pub cleaned: String,
    /// 정규화 결과
    pub normalized: NormalizedText,
    /// 초성 추출 결과
    pub choseong: String,
    /// 입력 전체가 낱자모인지
    pub bare_jamo_only: bool,
    /// 연속 낱자모가 있는지
    pub embedded_jamo_run: bool,
    /// 사전 매칭 결과
    pub lexicon_hit: Option<LexiconHit>,
    /// 최종 판정 (classify 결과와 같음)
    pub classification: Classification,
}
