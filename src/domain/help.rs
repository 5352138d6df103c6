//! 도움말 문서 값 객체.

/// 제목 + 들여쓰기 기반 본문으로 이루어진 도움말 문서.
/// 본문은 4칸 공백 단위로 계층을 표현한다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpDocument {
    pub title: String,
    pub body: String,
}

impl HelpDocument {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}
