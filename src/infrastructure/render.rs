//! 콘솔 도움말 렌더링 모듈.
//!
//! 4칸 공백 단위로 계층을 표현한 본문을 레벨별 글머리 기호와 함께
//! 들여쓰고, 설정된 표시 폭에 맞춰 줄바꿈한다.

use unicode_width::UnicodeWidthChar;

use crate::application::config::HelpStyle;
use crate::domain::help::HelpDocument;

/// 원문 본문의 들여쓰기 단위(공백 4칸 고정).
const SOURCE_INDENT: &str = "    ";
const BANNER: &str = "Help";

/// 도움말 문서 목록을 콘솔 출력 줄로 변환한다. 문서는 주어진 순서대로 출력된다.
pub fn render_help(documents: &[HelpDocument], style: &HelpStyle) -> Vec<String> {
    let border = rule(&style.border, style.width);
    let mut out = vec![
        border.clone(),
        center(BANNER, style.width),
        center(&rule(&style.title, BANNER.len()), style.width),
        border.clone(),
        String::new(),
    ];

    for doc in documents {
        out.push(doc.title.clone());
        out.push(rule(&style.subtitle, display_width(&doc.title).ceil() as usize));
        out.push(String::new());
        for line in body_lines(&doc.body) {
            out.extend(render_line(line, style));
        }
        out.push(String::new());
    }

    out.push(border);
    out
}

/// 본문 한 줄을 글머리 기호 + 줄바꿈 처리된 출력 줄로 변환한다.
pub fn render_line(line: &str, style: &HelpStyle) -> Vec<String> {
    if line.trim().is_empty() {
        return vec![String::new()];
    }

    let level = indent_level(line, style.symbols.len().saturating_sub(1));
    let text = line.trim();
    if level == 0 {
        return wrap(text, "", "", style.width);
    }

    let lead = style.indent * level;
    let first = format!(
        "{}{} ",
        " ".repeat(lead.saturating_sub(2)),
        style.symbols[level]
    );
    let continuation = " ".repeat(lead);
    wrap(text, &first, &continuation, style.width)
}

/// 선행 4칸 공백 단위 수. `max_level`을 넘지 않는다.
pub fn indent_level(line: &str, max_level: usize) -> usize {
    let mut level = 0;
    let mut rest = line;
    while level < max_level
        && let Some(next) = rest.strip_prefix(SOURCE_INDENT)
    {
        level += 1;
        rest = next;
    }
    level
}

/// `first_prefix + text`를 `width` 표시 폭 안으로 나눈다.
/// 마지막 공백에서 끊고, 공백이 없으면 폭 경계에서 강제로 끊는다.
pub fn wrap(text: &str, first_prefix: &str, cont_prefix: &str, width: usize) -> Vec<String> {
    let budget = width.saturating_mul(3);
    let mut lines = Vec::new();
    let mut prefix = first_prefix;
    let mut rest = text;

    loop {
        if rest.is_empty() || thirds(prefix) + thirds(rest) <= budget {
            lines.push(format!("{prefix}{rest}"));
            break;
        }

        let mut fit = fit_len(rest, budget.saturating_sub(thirds(prefix)));
        if fit == 0 {
            // 접두어만으로 폭을 넘으면 한 글자씩이라도 진행한다.
            fit = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }

        let search_end = if rest[fit..].starts_with(' ') { fit + 1 } else { fit };
        match rest[..search_end].rfind(' ').filter(|&p| p > 0) {
            Some(space) => {
                lines.push(format!("{prefix}{}", rest[..space].trim_end()));
                rest = rest[space + 1..].trim_start_matches(' ');
            }
            None => {
                lines.push(format!("{prefix}{}", &rest[..fit]));
                rest = &rest[fit..];
            }
        }
        if rest.is_empty() {
            break;
        }
        prefix = cont_prefix;
    }

    lines
}

/// 표시 폭(열). 제어 문자는 1/3열로 계산한다.
pub fn display_width(text: &str) -> f64 {
    thirds(text) as f64 / 3.0
}

// 1/3열 단위 폭. 제어 문자(이스케이프 등)는 실제로 거의 자리를 차지하지 않는다.
fn thirds(text: &str) -> usize {
    text.chars().map(char_thirds).sum()
}

fn char_thirds(ch: char) -> usize {
    if ch.is_control() {
        return 1;
    }
    UnicodeWidthChar::width(ch).unwrap_or(0) * 3
}

// `budget` 안에 들어가는 가장 긴 접두 바이트 길이.
fn fit_len(text: &str, budget: usize) -> usize {
    let mut used = 0;
    for (idx, ch) in text.char_indices() {
        used += char_thirds(ch);
        if used > budget {
            return idx;
        }
    }
    text.len()
}

fn rule(fill: &str, width: usize) -> String {
    fill.chars().cycle().take(width).collect()
}

fn center(text: &str, width: usize) -> String {
    let used = display_width(text).ceil() as usize;
    let pad = width.saturating_sub(used) / 2;
    format!("{}{text}", " ".repeat(pad))
}

// 앞뒤 빈 줄을 제외한 본문 줄.
fn body_lines(body: &str) -> impl Iterator<Item = &str> {
    let lines: Vec<&str> = body.lines().collect();
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(start, |i| i + 1);
    lines[start..end].to_vec().into_iter()
}
