//! 콘솔 포트 구현 어댑터.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::application::ports::Console;
use crate::domain::signal::Signal;
use crate::infrastructure::adapters::line_input::{self, LineInput};

/// 표준 입출력 콘솔.
pub struct StdConsole;

impl Console for StdConsole {
    fn read_line(&self, prompt: &str) -> Result<String, Signal> {
        match line_input::read_line(prompt) {
            Ok(LineInput::Line(line)) => Ok(line),
            Ok(LineInput::Interrupted) => Err(Signal::Interrupted),
            Err(err) => {
                // 입력 스트림을 더 읽을 수 없으면 세션을 정상 종료시킨다.
                tracing::warn!(error = %err, "failed to read console input");
                Err(Signal::Interrupted)
            }
        }
    }

    fn print_line(&self, line: &str) {
        println!("{line}");
    }
}

/// 미리 준비한 응답을 순서대로 돌려주고 모든 출력을 기록하는 콘솔.
/// 응답이 바닥나면 인터럽트로 처리한다.
#[derive(Default)]
pub struct ScriptedConsole {
    responses: RefCell<VecDeque<String>>,
    transcript: RefCell<Vec<String>>,
    echo: bool,
}

impl ScriptedConsole {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: RefCell::new(responses.into_iter().map(Into::into).collect()),
            transcript: RefCell::new(Vec::new()),
            echo: false,
        }
    }

    /// 기록과 동시에 stdout으로도 출력한다(스크립트 실행 모드).
    pub fn echoing(mut self) -> Self {
        self.echo = true;
        self
    }

    /// 지금까지 출력된 줄. 읽은 응답은 `<prompt><response>` 한 줄로 기록된다.
    pub fn transcript(&self) -> Vec<String> {
        self.transcript.borrow().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.borrow().len()
    }

    fn record(&self, line: String) {
        if self.echo {
            println!("{line}");
        }
        self.transcript.borrow_mut().push(line);
    }
}

impl Console for ScriptedConsole {
    fn read_line(&self, prompt: &str) -> Result<String, Signal> {
        let next = self.responses.borrow_mut().pop_front();
        match next {
            Some(response) => {
                self.record(format!("{prompt}{response}"));
                Ok(response)
            }
            None => Err(Signal::Interrupted),
        }
    }

    fn print_line(&self, line: &str) {
        self.record(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_console_records_and_exhausts() {
        let console = ScriptedConsole::new(["a"]);
        assert_eq!(console.read_line("> "), Ok("a".to_string()));
        console.print_line("out");
        assert_eq!(console.read_line("> "), Err(Signal::Interrupted));
        assert_eq!(console.transcript(), vec!["> a", "out"]);
        assert_eq!(console.remaining(), 0);
    }
}
