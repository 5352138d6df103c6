//! 데모 오케스트레이터.
//!
//! `Demo` 트레이트는 레지스트리/가드/렌더러를 묶어 대화형 데모의 공통 동작
//! (인트로, 도움말, 옵션 목록, 제어 흐름, 가드된 메인 루프)을 제공한다.
//! 구체 데모는 `DemoCore`를 보관하고 `run`만 구현하면 된다.

use std::rc::Rc;

use crate::application::config::{DemoConfig, HelpStyle};
use crate::application::guard::{CatchSet, catch_signals};
use crate::application::ports::Console;
use crate::application::registry::OptionRegistry;
use crate::domain::help::HelpDocument;
use crate::domain::option::{Callback, CallbackResult};
use crate::domain::signal::{Signal, SignalKind};
use crate::infrastructure::render::render_help;

pub const DEMO_HELP_TITLE: &str = "Demo";
pub const DEMO_HELP_TEXT: &str = "
Demo is a small framework for interactive, menu-driven command line programs.

Key pieces:
    `restart`, `retry` and `quit`: the control flow tools.
        Each returns a signal that unwinds to the nearest guard.
    `run`: the main logic of a demo, wrapped by a guard that restarts it.
    `print_help`: prints this text.
    `options`: the option registry, used to:
        Register a callback for a response.
        Bind the responses an input function accepts.
    `print_options`: prints the responses an input function accepts.";

/// 데모 인스턴스 공통 상태.
pub struct DemoCore<D> {
    name: String,
    options: Rc<OptionRegistry<D>>,
    console: Rc<dyn Console>,
    config: DemoConfig,
    intro_shown: bool,
}

impl<D> DemoCore<D> {
    pub fn new(
        name: impl Into<String>,
        options: OptionRegistry<D>,
        console: Rc<dyn Console>,
        config: DemoConfig,
    ) -> Self {
        Self {
            name: name.into(),
            options: Rc::new(options),
            console,
            config,
            intro_shown: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 레지스트리 핸들. 콜백 실행 중에도 데모를 가변 대여할 수 있도록 별도 `Rc`로 돌려준다.
    pub fn options(&self) -> Rc<OptionRegistry<D>> {
        Rc::clone(&self.options)
    }

    pub fn console(&self) -> Rc<dyn Console> {
        Rc::clone(&self.console)
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }
}

/// 모든 데모 타입이 공유하는 기본 옵션: `h`, `o`, `r`, `q`.
/// 파생 데모는 이 레지스트리 위에 자신의 옵션을 등록한다.
pub fn base_options<D: Demo>() -> OptionRegistry<D> {
    let mut options = OptionRegistry::new();
    options
        .register("h", Callback::plain(|demo: &mut D| demo.print_help()))
        .description("Help.")
        .retry(true)
        .newline(true);
    options
        .register(
            "o",
            Callback::keyed(|demo: &mut D, key| demo.print_options(&[], key)),
        )
        .description("Options.")
        .retry(true)
        .lock(true)
        .newline(true);
    options
        .register("r", Callback::plain(|demo: &mut D| Err(demo.restart(None))))
        .description("Restart.");
    options
        .register("q", Callback::plain(|demo: &mut D| Err(demo.quit(None))))
        .description("Quit.");
    options
}

pub trait Demo: Sized + 'static {
    fn core(&self) -> &DemoCore<Self>;

    fn core_mut(&mut self) -> &mut DemoCore<Self>;

    /// 데모의 메인 로직. `run_guarded`가 가드로 감싸 실행한다.
    fn run(&mut self) -> CallbackResult;

    /// 상위 데모부터 자기 자신까지의 도움말 문서(상위 → 하위 순).
    fn help_documents(&self) -> Vec<HelpDocument> {
        vec![HelpDocument::new(DEMO_HELP_TITLE, DEMO_HELP_TEXT)]
    }

    /// 입력 함수 `key`의 보조 옵션 목록(이름, 설명). `print_options`에서 가장 먼저 출력된다.
    fn input_options(&self, _key: &str) -> Vec<(String, String)> {
        Vec::new()
    }

    /// 환영 문구를 한 번만 출력한다.
    fn print_intro(&mut self) {
        if self.core().intro_shown {
            return;
        }
        let console = self.core().console();
        console.print_line(&format!("Welcome to {}!", self.core().name()));
        console.blank_line();
        self.core_mut().intro_shown = true;
    }

    fn print_help(&mut self) -> CallbackResult {
        let style = self.core().config().help.clone();
        self.print_help_with(&style);
        Ok(())
    }

    /// `style.include`가 거짓이면 가장 하위 데모의 문서만 출력한다.
    fn print_help_with(&self, style: &HelpStyle) {
        let mut documents = self.help_documents();
        if !style.include && documents.len() > 1 {
            documents = documents.split_off(documents.len() - 1);
        }

        let console = self.core().console();
        for line in render_help(&documents, style) {
            console.print_line(&line);
        }
        console.blank_line();
    }

    /// 입력 함수가 받는 응답 목록을 출력한다.
    ///
    /// 출력 순서:
    /// 1. `input_options(key)`의 보조 옵션
    /// 2. 바인딩의 로컬 설명 재정의 옵션
    /// 3. 바인딩의 허용 이름(레지스트리 설명)
    /// 4. `names`로 직접 전달된 이름(레지스트리 설명)
    fn print_options(&mut self, names: &[&str], key: Option<&str>) -> CallbackResult {
        let options = self.core().options();
        let mut rows: Vec<(String, String)> = Vec::new();

        if let Some(key) = key {
            rows.extend(self.input_options(key));
            if let Some(binding) = options.binding(key) {
                rows.extend(binding.overrides().iter().cloned());
                rows.extend(
                    binding
                        .accepted()
                        .iter()
                        .map(|name| (name.clone(), options.describe(name).to_string())),
                );
            }
        }
        rows.extend(
            names
                .iter()
                .map(|name| (name.to_string(), options.describe(name).to_string())),
        );

        let console = self.core().console();
        console.print_line("Options:");
        let width = option_column_width(&rows);
        for (name, description) in &rows {
            console.print_line(&format!("{name:>width$}: {description}"));
        }
        console.blank_line();
        Ok(())
    }

    /// 마지막 입력 함수로 되돌아가는 신호.
    fn retry(&self, text: Option<&str>) -> Signal {
        Signal::retry(text.map(str::to_string))
    }

    /// 메인 루프를 다시 시작하는 신호.
    fn restart(&self, text: Option<&str>) -> Signal {
        Signal::restart(text.map(str::to_string))
    }

    /// 메인 루프를 끝내는 신호.
    fn quit(&self, text: Option<&str>) -> Signal {
        Signal::exit(text.map(str::to_string))
    }

    /// 입력 함수 `key`가 받은 응답을 레지스트리로 디스패치한다.
    fn dispatch(&mut self, key: &str, response: &str) -> CallbackResult {
        let options = self.core().options();
        let console = self.core().console();
        options.dispatch(self, &*console, key, response)
    }

    /// 한 줄을 읽어 입력 함수 `key`로 디스패치한다.
    fn prompt(&mut self, key: &str, prompt: &str) -> CallbackResult {
        let console = self.core().console();
        let response = console.read_line(prompt)?;
        self.dispatch(key, response.trim())
    }

    /// 입력 함수 본문을 Retry 전용 가드로 감싼다. Retry면 본문을 다시 호출한다.
    fn retry_input(&mut self, mut body: impl FnMut(&mut Self) -> CallbackResult) -> CallbackResult {
        let console = self.core().console();
        catch_signals(&*console, &CatchSet::only(&[SignalKind::Retry]), || body(self))?;
        Ok(())
    }

    /// 모든 신호를 가로채는 최상위 가드 안에서 `run`을 실행한다.
    /// Exit(또는 인터럽트)로만 끝나며 Restart/Retry/조회 오류는 `run`을 다시 시작한다.
    fn run_guarded(&mut self) -> CallbackResult {
        let console = self.core().console();
        catch_signals(&*console, &CatchSet::all(), || self.run())?;
        Ok(())
    }
}

// 가장 긴 이름 기준으로 4칸 단위 정렬 폭을 계산한다.
fn option_column_width(rows: &[(String, String)]) -> usize {
    let longest = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(1) as i64;
    ((longest - 3).div_euclid(4) * 4 + 6).max(0) as usize
}
