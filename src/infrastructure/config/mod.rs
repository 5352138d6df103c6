//! 사용자 설정(JSON) 로딩/병합 모듈.
//! 여러 경로의 설정을 우선순위대로 병합한다. 파일이 없으면 기본값을 쓴다.

mod loader;

use std::path::Path;

use anyhow::Result;

pub use loader::{LoadedConfig, config_paths, load_merged_config};

use crate::application::config::DemoConfig;

/// 표준 경로(+선택적 명시 경로)를 병합해 실행용 설정을 만든다.
pub fn load_demo_config(explicit: Option<&Path>) -> Result<DemoConfig> {
    Ok(load_merged_config(explicit)?.config.resolve())
}
