//! 기본 데모: 내장 옵션과 setup 입력 함수 하나로 구성된 가장 단순한 데모.

use std::rc::Rc;

use crate::application::config::DemoConfig;
use crate::application::demo::{Demo, DemoCore, base_options};
use crate::application::ports::Console;
use crate::application::registry::{OptionRegistry, WILDCARD};
use crate::domain::option::{Callback, CallbackResult};

/// setup 입력 함수의 바인딩 키.
pub const SETUP_KEY: &str = "setup";

pub struct BasicDemo {
    core: DemoCore<BasicDemo>,
}

impl BasicDemo {
    pub fn new(console: Rc<dyn Console>, config: DemoConfig) -> Self {
        Self {
            core: DemoCore::new("BasicDemo", Self::options(), console, config),
        }
    }

    /// 내장 옵션 + setup 핸들러/바인딩.
    pub fn options() -> OptionRegistry<Self> {
        let mut options = base_options::<Self>();
        options
            .register(
                SETUP_KEY,
                Callback::response(|demo: &mut Self, response| demo.setup_callback(response)),
            )
            .retry(true);
        options.bind_input_options_with(
            SETUP_KEY,
            &["h", "o", "r", "q"],
            &[(WILDCARD, "Any response.")],
        );
        options
    }

    /// setup 입력에 대한 응답 처리.
    pub fn setup_callback(&mut self, response: &str) -> CallbackResult {
        let console = self.core.console();
        console.print_line(&format!("Got: {response}"));
        console.blank_line();
        Ok(())
    }

    /// setup 프롬프트를 반복한다. Retry 신호는 여기서 흡수된다.
    pub fn run_setup(&mut self) -> CallbackResult {
        let prompt = self.core.config().setup_prompt.clone();
        self.retry_input(|demo| demo.prompt(SETUP_KEY, &prompt))
    }
}

impl Demo for BasicDemo {
    fn core(&self) -> &DemoCore<Self> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DemoCore<Self> {
        &mut self.core
    }

    fn run(&mut self) -> CallbackResult {
        self.print_intro();
        self.print_options(&[], Some(SETUP_KEY))?;
        self.run_setup()
    }
}
