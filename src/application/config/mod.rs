//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SETUP_PROMPT: &str = "Select an option, or type something random: ";
pub const DEFAULT_HELP_WIDTH: usize = 60;
/// 터미널 열 좌표(u16)로 표현 가능한 최대 도움말 폭.
pub const MAX_HELP_WIDTH: usize = u16::MAX as usize;
pub const DEFAULT_HELP_INDENT: usize = 4;
pub const DEFAULT_HELP_SYMBOLS: [&str; 5] = [" ", "●", "○", "▸", "▹"];

/// 설정 파일 스키마. 모든 필드는 선택이며 나중 파일이 필드 단위로 덮어쓴다.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// 데모 루프 설정
    #[serde(default)]
    pub demo: DemoSection,
    /// 도움말 렌더링 설정
    #[serde(default)]
    pub help: HelpSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct DemoSection {
    /// setup 입력 함수 프롬프트
    pub setup_prompt: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct HelpSection {
    /// 한 줄 최대 표시 폭
    pub width: Option<usize>,
    /// 들여쓰기 단위당 출력 공백 수
    pub indent: Option<usize>,
    /// 들여쓰기 레벨별 글머리 기호(0레벨은 사용하지 않음)
    pub symbols: Option<Vec<String>>,
    /// 전체 테두리 문자
    pub border: Option<String>,
    /// "Help" 배너 구분선 문자
    pub title: Option<String>,
    /// 문서 제목 밑줄 문자
    pub subtitle: Option<String>,
    /// 상위 데모 문서까지 포함할지 여부(기본 true)
    pub include: Option<bool>,
}

/// 해석이 끝난 도움말 스타일.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpStyle {
    pub width: usize,
    pub indent: usize,
    pub symbols: Vec<String>,
    pub border: String,
    pub title: String,
    pub subtitle: String,
    pub include: bool,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_HELP_WIDTH,
            indent: DEFAULT_HELP_INDENT,
            symbols: DEFAULT_HELP_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            border: "~".to_string(),
            title: "=".to_string(),
            subtitle: "-".to_string(),
            include: true,
        }
    }
}

/// 데모 인스턴스가 실행 중 참조하는 설정.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub setup_prompt: String,
    pub help: HelpStyle,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            setup_prompt: DEFAULT_SETUP_PROMPT.to_string(),
            help: HelpStyle::default(),
        }
    }
}

impl Config {
    /// 기본값을 채워 실행용 설정으로 변환한다.
    pub fn resolve(&self) -> DemoConfig {
        let defaults = HelpStyle::default();
        let help = &self.help;
        DemoConfig {
            setup_prompt: self
                .demo
                .setup_prompt
                .clone()
                .unwrap_or_else(|| DEFAULT_SETUP_PROMPT.to_string()),
            help: HelpStyle {
                width: clamp_width(help.width.unwrap_or(defaults.width)),
                indent: help.indent.unwrap_or(defaults.indent),
                symbols: help
                    .symbols
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or(defaults.symbols),
                border: non_empty_or(&help.border, defaults.border),
                title: non_empty_or(&help.title, defaults.title),
                subtitle: non_empty_or(&help.subtitle, defaults.subtitle),
                include: help.include.unwrap_or(defaults.include),
            },
        }
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        if other.demo.setup_prompt.is_some() {
            self.demo.setup_prompt = other.demo.setup_prompt;
        }
        self.help.merge_from(other.help);
    }
}

impl HelpSection {
    pub fn merge_from(&mut self, other: HelpSection) {
        if other.width.is_some() {
            self.width = other.width;
        }
        if other.indent.is_some() {
            self.indent = other.indent;
        }
        if other.symbols.is_some() {
            self.symbols = other.symbols;
        }
        if other.border.is_some() {
            self.border = other.border;
        }
        if other.title.is_some() {
            self.title = other.title;
        }
        if other.subtitle.is_some() {
            self.subtitle = other.subtitle;
        }
        if other.include.is_some() {
            self.include = other.include;
        }
    }
}

/// 0폭은 줄바꿈이 끝나지 않으므로 최소 1, 최대 `MAX_HELP_WIDTH`로 보정한다.
pub fn clamp_width(width: usize) -> usize {
    width.clamp(1, MAX_HELP_WIDTH)
}

fn non_empty_or(value: &Option<String>, fallback: String) -> String {
    value.clone().filter(|v| !v.is_empty()).unwrap_or(fallback)
}
