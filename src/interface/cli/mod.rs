//! CLI 인터페이스 모듈 묶음.
//! 명령 파싱/조립/기본 데모/세션 실행을 한 네임스페이스로 관리한다.

pub mod basic_demo;
pub mod command;
pub mod composition;
pub mod repl;

pub use basic_demo::{BasicDemo, SETUP_KEY};
pub use command::{Cli, CliAction, SessionOptions};
pub use composition::AppComposition;
pub use repl::run_repl;
