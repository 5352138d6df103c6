//! 설정 파일 탐색/병합 로더.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::application::config::Config;

pub const CONFIG_ENV: &str = "CLI_DEMO_CONFIG";

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
}

/// 우선순위 경로를 순회해 JSON 설정을 병합한다.
/// 존재하지 않는 파일은 건너뛰고, 읽기/파싱 실패는 경로와 함께 에러로 반환한다.
pub fn load_merged_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    // 낮은 우선순위에서 높은 우선순위 순서로 병합한다.
    let mut merged = Config::default();
    let mut loaded_paths = Vec::new();
    let mut paths = config_paths();

    if let Some(path) = explicit {
        // 명시 경로는 반드시 존재해야 한다.
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        paths.push(path.to_path_buf());
        paths = dedup_paths(paths);
    }

    for path in &paths {
        if !path.exists() {
            continue;
        }

        merged.merge_from(read_config(path)?);
        loaded_paths.push(path.to_path_buf());
    }

    debug!(loaded = ?loaded_paths, "config loaded");
    Ok(LoadedConfig {
        config: merged,
        searched_paths: paths,
        loaded_paths,
    })
}

/// 사용자 + 프로젝트 + 환경변수 경로 순으로 병합 경로를 구성한다.
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(base) = dirs::config_dir() {
        paths.push(base.join("cli-demo").join("config.json"));
    }

    paths.push(PathBuf::from(".cli-demo/config.json"));

    if let Ok(path) = env::var(CONFIG_ENV) {
        paths.push(PathBuf::from(path));
    }

    dedup_paths(paths)
}

fn read_config(path: &Path) -> Result<Config> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config at {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse JSON in {}", path.display()))
}

fn dedup_paths(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut out = Vec::new();
    for p in paths {
        if !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
