//! 데모 루프의 제어 흐름 신호(Restart/Retry/Exit)와 옵션 조회 오류.
//!
//! 신호는 `Result<_, Signal>`의 에러 채널로 전파되며, 가장 가까운
//! 가드(`application::guard`)가 가로채 텍스트를 출력하고 루프를 이어갈지 결정한다.

use std::borrow::Cow;
use std::fmt;

use thiserror::Error;

pub const RESTART_TEXT: &str = "Restarting.";
pub const EXIT_TEXT: &str = "Goodbye!";

/// 옵션 등록/조회 과정의 설정 오류.
/// 프로그래머 실수지만 세션을 죽이지 않도록 신호로 승격되어 가드에서 출력된다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionLookupError {
    /// 입력 함수 키가 바인딩 캐시에 없음.
    #[error("'{key}' does not exist in the cache.")]
    NameNotInCache { key: String },

    /// 허용된 응답도 아니고 와일드카드도 없음.
    #[error("'{name}' not registered.")]
    NotRegistered { name: String },

    /// 와일드카드 응답을 넘겨받을 핸들러가 입력 키 이름으로 등록되지 않음.
    #[error("'{name}' callback not registered")]
    CallbackNotFound { name: String },

    /// lock 옵션인데 콜백이 key를 받지 않는 형태.
    #[error("'{name}' callback not lock, key rejected")]
    NotLockCompatible { name: String },
}

/// 가드 catch-set에서 사용하는 신호 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Retry,
    Restart,
    Exit,
    Lookup,
}

impl SignalKind {
    pub const ALL: [SignalKind; 4] = [Self::Retry, Self::Restart, Self::Exit, Self::Lookup];
}

/// 중첩된 입력 함수에서 메인 루프까지 되감기 위한 제어 흐름 값.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Signal {
    /// 마지막 입력 함수를 다시 호출한다.
    Retry(Option<String>),
    /// 메인 `run` 루프를 처음부터 다시 시작한다.
    Restart(Option<String>),
    /// 메인 루프를 빠져나간다.
    Exit(Option<String>),
    /// 사용자 인터럽트(Ctrl-C/EOF). 가드가 `Exit`로 변환한다.
    Interrupted,
    Lookup(OptionLookupError),
}

impl Signal {
    pub fn retry(text: Option<String>) -> Self {
        Self::Retry(non_empty(text))
    }

    pub fn restart(text: Option<String>) -> Self {
        Self::Restart(non_empty(text))
    }

    pub fn exit(text: Option<String>) -> Self {
        Self::Exit(non_empty(text))
    }

    /// 가드가 출력할 텍스트. 생성 시 텍스트가 없으면 종류별 기본값을 쓴다.
    pub fn text(&self) -> Cow<'_, str> {
        match self {
            Self::Retry(text) => Cow::Borrowed(text.as_deref().unwrap_or("")),
            Self::Restart(text) => Cow::Borrowed(text.as_deref().unwrap_or(RESTART_TEXT)),
            Self::Exit(text) => Cow::Borrowed(text.as_deref().unwrap_or(EXIT_TEXT)),
            Self::Interrupted => Cow::Borrowed(""),
            Self::Lookup(err) => Cow::Owned(err.to_string()),
        }
    }

    /// 인터럽트는 종류가 없다. 어떤 가드든 먼저 `Exit`로 바꿔 처리한다.
    pub fn kind(&self) -> Option<SignalKind> {
        match self {
            Self::Retry(_) => Some(SignalKind::Retry),
            Self::Restart(_) => Some(SignalKind::Restart),
            Self::Exit(_) => Some(SignalKind::Exit),
            Self::Interrupted => None,
            Self::Lookup(_) => Some(SignalKind::Lookup),
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit(_))
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interrupted => f.write_str("interrupted"),
            other => f.write_str(&other.text()),
        }
    }
}

impl From<OptionLookupError> for Signal {
    fn from(err: OptionLookupError) -> Self {
        Self::Lookup(err)
    }
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.is_empty())
}
