//! 터미널 한 줄 입력기.
//! TTY에서는 raw mode 라인 에디터를, 그 외에는 일반 라인 입력을 사용한다.

use std::env;
use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{self, ClearType};
use unicode_width::UnicodeWidthStr;

/// 한 줄 입력 결과.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineInput {
    Line(String),
    /// Ctrl-C, 빈 줄에서 Ctrl-D, 또는 입력 종료(EOF).
    Interrupted,
}

/// 프롬프트를 출력하고 한 줄을 읽는다.
/// - TTY + 지원 터미널: raw mode 라인 편집
/// - non-TTY/미지원 터미널 또는 raw mode 실패: 일반 라인 입력
pub fn read_line(prompt: &str) -> Result<LineInput> {
    if !supports_interactive_input() {
        return read_line_fallback(prompt);
    }

    match read_line_interactive(prompt) {
        Ok(v) => Ok(v),
        Err(err) => {
            tracing::debug!(error = %err, "interactive input unavailable, falling back");
            read_line_fallback(prompt)
        }
    }
}

fn supports_interactive_input() -> bool {
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return false;
    }

    // dumb 터미널에서는 제어 시퀀스 기반 편집을 비활성화한다.
    if let Ok(term) = env::var("TERM")
        && term.eq_ignore_ascii_case("dumb")
    {
        return false;
    }

    true
}

fn read_line_fallback(prompt: &str) -> Result<LineInput> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        return Ok(LineInput::Interrupted);
    }

    Ok(LineInput::Line(trim_newline(line)))
}

fn read_line_interactive(prompt: &str) -> Result<LineInput> {
    let mut stdout = io::stdout();
    let _guard = RawModeGuard::enter()?;

    let mut input = String::new();
    let mut cursor_chars = 0usize;

    loop {
        render_prompt(&mut stdout, prompt, &input, cursor_chars)?;

        match event::read()? {
            Event::Paste(text) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    insert_char_at(&mut input, cursor_chars, ch);
                    cursor_chars += 1;
                }
            }
            Event::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match key.code {
                    KeyCode::Enter => {
                        finish_line(&mut stdout)?;
                        return Ok(LineInput::Line(input));
                    }
                    KeyCode::Backspace => {
                        if cursor_chars > 0 {
                            remove_char_at(&mut input, cursor_chars - 1);
                            cursor_chars -= 1;
                        }
                    }
                    KeyCode::Delete => {
                        if cursor_chars < input.chars().count() {
                            remove_char_at(&mut input, cursor_chars);
                        }
                    }
                    KeyCode::Left => {
                        cursor_chars = cursor_chars.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        cursor_chars = (cursor_chars + 1).min(input.chars().count());
                    }
                    KeyCode::Home => {
                        cursor_chars = 0;
                    }
                    KeyCode::End => {
                        cursor_chars = input.chars().count();
                    }
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        finish_line(&mut stdout)?;
                        return Ok(LineInput::Interrupted);
                    }
                    KeyCode::Char('d')
                        if key.modifiers.contains(KeyModifiers::CONTROL) && input.is_empty() =>
                    {
                        finish_line(&mut stdout)?;
                        return Ok(LineInput::Interrupted);
                    }
                    KeyCode::Char(ch) => {
                        if !key.modifiers.contains(KeyModifiers::CONTROL)
                            && !key.modifiers.contains(KeyModifiers::ALT)
                        {
                            insert_char_at(&mut input, cursor_chars, ch);
                            cursor_chars += 1;
                        }
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}

// 현재 줄을 지우고 프롬프트 + 입력을 다시 그린 뒤 커서를 맞춘다.
fn render_prompt(
    stdout: &mut io::Stdout,
    prompt: &str,
    input: &str,
    cursor_chars: usize,
) -> Result<()> {
    execute!(
        stdout,
        cursor::MoveToColumn(0),
        terminal::Clear(ClearType::CurrentLine)
    )?;
    write!(stdout, "{prompt}{input}")?;

    let before_cursor: String = input.chars().take(cursor_chars).collect();
    let col = UnicodeWidthStr::width(prompt) + UnicodeWidthStr::width(before_cursor.as_str());
    execute!(stdout, cursor::MoveToColumn(col.min(u16::MAX as usize) as u16))?;
    stdout.flush()?;
    Ok(())
}

// raw mode에서는 개행이 캐리지 리턴을 포함하지 않으므로 직접 출력한다.
fn finish_line(stdout: &mut io::Stdout) -> Result<()> {
    write!(stdout, "\r\n")?;
    stdout.flush()?;
    Ok(())
}

fn trim_newline(mut s: String) -> String {
    while matches!(s.chars().last(), Some('\n' | '\r')) {
        s.pop();
    }
    s
}

struct RawModeGuard;

impl RawModeGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = io::stdout().flush();
    }
}

fn insert_char_at(input: &mut String, char_idx: usize, ch: char) {
    let byte_idx = byte_index_at_char(input, char_idx);
    input.insert(byte_idx, ch);
}

fn remove_char_at(input: &mut String, char_idx: usize) {
    let start = byte_index_at_char(input, char_idx);
    let end = byte_index_at_char(input, char_idx + 1);
    if start < end && end <= input.len() {
        input.replace_range(start..end, "");
    }
}

fn byte_index_at_char(input: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    input
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(input.len())
}
