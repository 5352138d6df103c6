//! cli-demo library root.
//! 메뉴 기반 대화형 CLI 데모 프레임워크를 Clean Architecture 계층으로 노출한다.

use anyhow::Result;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

use interface::cli::{AppComposition, SessionOptions};

pub use application::demo::{Demo, DemoCore, base_options};
pub use application::guard::{CatchSet, catch_signals};
pub use application::ports::Console;
pub use application::registry::{InputBinding, OptionRegistry, WILDCARD};
pub use domain::option::{Callback, CallbackResult, DemoOption};
pub use domain::signal::{OptionLookupError, Signal, SignalKind};

/// 라이브러리 직접 호출용 실행 함수.
pub fn run(options: &SessionOptions) -> Result<()> {
    let composition = AppComposition::from_options(options)?;
    interface::cli::run_repl(&composition)
}

/// 설정 점검 JSON 출력용 함수.
pub fn inspect_config_pretty_json(explicit: Option<&std::path::Path>) -> Result<String> {
    let loaded = infrastructure::config::load_merged_config(explicit)?;
    let value = serde_json::json!({
        "searched_paths": loaded.searched_paths,
        "loaded_paths": loaded.loaded_paths,
        "config": loaded.config,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
