//! 애플리케이션 조립(composition root) 모듈.

use std::fs;
use std::rc::Rc;

use anyhow::{Context, Result};

use crate::application::config::{DemoConfig, clamp_width};
use crate::application::ports::Console;
use crate::infrastructure::adapters::{ScriptedConsole, StdConsole};
use crate::infrastructure::config::load_demo_config;
use crate::interface::cli::basic_demo::BasicDemo;
use crate::interface::cli::command::SessionOptions;

/// 실행 시점 의존성(설정 + 콘솔)을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config: DemoConfig,
    console: Rc<dyn Console>,
}

impl AppComposition {
    /// 설정 파일과 CLI 옵션을 병합하고 콘솔 어댑터를 고른다.
    pub fn from_options(options: &SessionOptions) -> Result<Self> {
        let mut config = load_demo_config(options.config.as_deref())?;
        if let Some(width) = options.width {
            config.help.width = clamp_width(width);
        }
        if options.no_include {
            config.help.include = false;
        }

        let console: Rc<dyn Console> = match &options.script {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read script at {}", path.display()))?;
                Rc::new(ScriptedConsole::new(raw.lines()).echoing())
            }
            None => Rc::new(StdConsole),
        };

        Ok(Self::with_console(config, console))
    }

    /// 콘솔을 외부에서 주입한다.
    pub fn with_console(config: DemoConfig, console: Rc<dyn Console>) -> Self {
        Self { config, console }
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// 기본 데모 인스턴스를 생성한다.
    pub fn basic_demo(&self) -> BasicDemo {
        BasicDemo::new(Rc::clone(&self.console), self.config.clone())
    }
}
