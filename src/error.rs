//! 설정 로드 및 금칙어 사전 생성 에러
//!
//! 판정(classify) 자체는 실패하지 않는다. 에러는 생성 시점에만 발생한다.

/// 설정/사전 에러
#[derive(Debug)]
pub enum GuardError {
    /// 파일 읽기/쓰기 실패
    Io(std::io::Error),
    /// JSON 파싱/직렬화 실패
    Parse(String),
    /// 금칙어 패턴 컴파일 실패
    InvalidPattern { pattern: String, reason: String },
}

impl std::fmt::Display for GuardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GuardError::Io(e) => write!(f, "파일 입출력 오류: {}", e),
            GuardError::Parse(s) => write!(f, "JSON 파싱 오류: {}", s),
            GuardError::InvalidPattern { pattern, reason } => {
                write!(f, "잘못된 패턴 '{}': {}", pattern, reason)
            }
        }
    }
}

impl std::error::Error for GuardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GuardError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GuardError {
    fn from(e: std::io::Error) -> Self {
        GuardError::Io(e)
    }
}

impl From<serde_json::Error> for GuardError {
    fn from(e: serde_json::Error) -> Self {
        GuardError::Parse(e.to_string())
    }
}
