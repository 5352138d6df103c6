//! 애플리케이션 포트를 실제 입출력 구현체로 연결하는 어댑터 계층.

mod console;
mod line_input;

pub use console::{ScriptedConsole, StdConsole};
pub use line_input::LineInput;
