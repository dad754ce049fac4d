//! 설정 파일 로드/저장 (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::detection::DEFAULT_MIN_JAMO_RUN;
use crate::error::GuardError;
use crate::lexicon::patterns::{
    to_owned_patterns, SOFT_CHOSEONG_PATTERNS, SOFT_PATTERNS, STRICT_CHOSEONG_PATTERNS,
    STRICT_PATTERNS,
};

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_ENV: &str = "HANGUL_GUARD_CONFIG";

/// 필터 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GuardConfig {
    /// 문장 안에서 차단할 연속 낱자모 최소 길이
    #[serde(default = "default_min_jamo_run")]
    pub min_jamo_run: usize,
    /// 금칙어 패턴
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

fn default_min_jamo_run() -> usize {
    DEFAULT_MIN_JAMO_RUN
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            min_jamo_run: default_min_jamo_run(),
            lexicon: LexiconConfig::default(),
        }
    }
}

/// 금칙어 패턴 설정 (정규식, 대소문자 무시)
///
/// 빠진 항목은 기본 패턴을 사용한다.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LexiconConfig {
    /// 강한 욕설
    pub strict: Vec<String>,
    /// 약한 모욕
    pub soft: Vec<String>,
    /// 강한 욕설 초성 약어
    pub strict_choseong: Vec<String>,
    /// 약한 모욕 초성 약어
    pub soft_choseong: Vec<String>,
}

impl Default for LexiconConfig {
    fn default() -> Self {
        Self {
            strict: to_owned_patterns(STRICT_PATTERNS),
            soft: to_owned_patterns(SOFT_PATTERNS),
            strict_choseong: to_owned_patterns(STRICT_CHOSEONG_PATTERNS),
            soft_choseong: to_owned_patterns(SOFT_CHOSEONG_PATTERNS),
        }
    }
}

/// 설정 파일 경로
///
/// `$HANGUL_GUARD_CONFIG` > `~/.config/hangul-guard/config.json`
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hangul-guard").join("config.json")
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> Result<GuardConfig, GuardError> {
    let content = fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    Ok(config)
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> GuardConfig {
    let path = config_path();
    match load_config_from(&path) {
        Ok(config) => config,
        Err(GuardError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("설정 파일 없음, 기본값 사용: {}", path.display());
            GuardConfig::default()
        }
        Err(e) => {
            log::warn!("설정 파일 로드 실패 ({}), 기본값 사용: {}", path.display(), e);
            GuardConfig::default()
        }
    }
}

/// 설정 파일 저장
pub fn save_config(config: &GuardConfig, path: &Path) -> Result<(), GuardError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
