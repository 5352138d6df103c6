//! 옵션 레지스트리.
//!
//! 옵션 이름 → `DemoOption` 테이블과, 입력 함수 키 → 허용 응답 바인딩 캐시를 함께 보관한다.
//! 데모 타입마다 값으로 소유하며, 확장이 필요하면 `copy()` 후 등록한다.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::application::ports::Console;
use crate::domain::option::{Callback, CallbackResult, DemoOption};
use crate::domain::signal::{OptionLookupError, Signal};

/// 아무 응답이나 입력 함수 자신의 핸들러로 넘기는 와일드카드.
pub const WILDCARD: &str = "*";

/// 입력 함수 하나에 허용된 응답 목록.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBinding {
    accepted: Vec<String>,
    overrides: Vec<(String, String)>,
}

impl InputBinding {
    /// 레지스트리 설명을 그대로 쓰는 허용 이름(등록 순서 유지).
    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// 이 입력 함수에서만 쓰는 로컬 설명이 붙은 허용 이름.
    pub fn overrides(&self) -> &[(String, String)] {
        &self.overrides
    }

    pub fn accepts(&self, name: &str) -> bool {
        self.accepted.iter().any(|n| n == name) || self.overrides.iter().any(|(n, _)| n == name)
    }

    pub fn has_wildcard(&self) -> bool {
        self.accepts(WILDCARD)
    }
}

pub struct OptionRegistry<D> {
    options: Vec<DemoOption<D>>,
    bindings: HashMap<String, InputBinding>,
}

impl<D> Default for OptionRegistry<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D> Clone for OptionRegistry<D> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            bindings: self.bindings.clone(),
        }
    }
}

impl<D> OptionRegistry<D> {
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            bindings: HashMap::new(),
        }
    }

    /// 독립된 사본을 만든다. 사본에 대한 등록/덮어쓰기는 원본에 영향을 주지 않는다.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// `name`으로 옵션을 등록하고 플래그 설정용 레코드를 돌려준다.
    /// 같은 이름이 이미 있으면 레코드를 통째로 교체한다.
    ///
    /// ```ignore
    /// options
    ///     .register("h", Callback::plain(|demo: &mut MyDemo| demo.print_help()))
    ///     .description("Help.")
    ///     .retry(true)
    ///     .newline(true);
    /// ```
    pub fn register(
        &mut self,
        name: impl Into<String>,
        callback: Callback<D>,
    ) -> &mut DemoOption<D> {
        let option = DemoOption::new(name, callback);
        debug!(name = %option.name, callback = ?option.callback, "register option");

        let idx = match self.options.iter().position(|o| o.name == option.name) {
            Some(idx) => {
                self.options[idx] = option;
                idx
            }
            None => {
                self.options.push(option);
                self.options.len() - 1
            }
        };
        &mut self.options[idx]
    }

    /// 입력 함수 `key`가 받을 수 있는 응답 이름을 바인딩한다.
    pub fn bind_input_options(&mut self, key: impl Into<String>, accepted: &[&str]) {
        self.bind_input_options_with(key, accepted, &[]);
    }

    /// 로컬 설명 재정의(`overrides`)를 포함해 바인딩한다. 같은 키는 교체된다.
    pub fn bind_input_options_with(
        &mut self,
        key: impl Into<String>,
        accepted: &[&str],
        overrides: &[(&str, &str)],
    ) {
        let key = key.into();
        let mut binding = InputBinding::default();
        for name in accepted {
            if !binding.accepted.iter().any(|n| n == name) {
                binding.accepted.push((*name).to_string());
            }
        }
        for (name, description) in overrides {
            binding.accepted.retain(|n| n != name);
            binding
                .overrides
                .push(((*name).to_string(), (*description).to_string()));
        }
        debug!(
            key = %key,
            accepted = ?binding.accepted,
            overrides = binding.overrides.len(),
            "bind input options"
        );
        self.bindings.insert(key, binding);
    }

    pub fn has_option(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&DemoOption<D>> {
        self.options.iter().find(|o| o.name == name)
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.get(name).map(|o| o.description.as_str())
    }

    /// 목록 출력용 설명. 등록되지 않은 이름은 빈 문자열.
    pub fn describe(&self, name: &str) -> &str {
        self.description(name).unwrap_or("")
    }

    pub fn has_binding(&self, key: &str) -> bool {
        self.bindings.contains_key(key)
    }

    pub fn binding(&self, key: &str) -> Option<&InputBinding> {
        self.bindings.get(key)
    }

    /// 등록 순서대로 옵션을 순회한다.
    pub fn options(&self) -> impl Iterator<Item = &DemoOption<D>> {
        self.options.iter()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// 입력 함수 `key`가 방금 받은 `response`를 옵션으로 해석해 실행한다.
    ///
    /// 해석 순서:
    /// 1. 바인딩에 허용된 이름이면서 등록된 옵션이면 그 콜백을 호출한다.
    /// 2. 바인딩에 와일드카드가 있으면 `key` 이름의 핸들러에 응답을 그대로 넘긴다.
    ///    핸들러는 응답을 받는 `Callback::Response`여야 한다.
    /// 3. 그 외에는 `NotRegistered`.
    pub fn dispatch(
        &self,
        demo: &mut D,
        console: &dyn Console,
        key: &str,
        response: &str,
    ) -> CallbackResult {
        let binding = self
            .bindings
            .get(key)
            .ok_or_else(|| OptionLookupError::NameNotInCache {
                key: key.to_string(),
            })?;

        if binding.accepts(response)
            && let Some(option) = self.get(response)
        {
            debug!(key, option = %option.name, "dispatch option");
            return call(option, demo, console, Some(key), response);
        }

        if binding.has_wildcard() {
            let handler = self
                .get(key)
                .filter(|o| matches!(o.callback, Callback::Response(_)))
                .ok_or_else(|| OptionLookupError::CallbackNotFound {
                    name: key.to_string(),
                })?;
            debug!(key, response, "hand off wildcard response");
            return call(handler, demo, console, Some(key), response);
        }

        Err(OptionLookupError::NotRegistered {
            name: response.to_string(),
        }
        .into())
    }

    /// 이름으로 옵션을 직접 호출한다. lock 옵션이면 `key`를 전달한다.
    pub fn invoke(
        &self,
        demo: &mut D,
        console: &dyn Console,
        name: &str,
        key: Option<&str>,
    ) -> CallbackResult {
        let option = self
            .get(name)
            .ok_or_else(|| OptionLookupError::NotRegistered {
                name: name.to_string(),
            })?;
        call(option, demo, console, key, name)
    }
}

fn call<D>(
    option: &DemoOption<D>,
    demo: &mut D,
    console: &dyn Console,
    key: Option<&str>,
    response: &str,
) -> CallbackResult {
    let outcome = if option.lock && !option.callback.accepts_key() {
        warn!(option = %option.name, "lock option registered without a keyed callback");
        Err(Signal::from(OptionLookupError::NotLockCompatible {
            name: option.name.clone(),
        }))
    } else {
        match &option.callback {
            Callback::Keyed(f) => f(demo, if option.lock { key } else { None }),
            Callback::Plain(f) => f(demo),
            Callback::Response(f) => f(demo, response),
        }
    };

    if option.newline {
        console.blank_line();
    }
    outcome?;

    if option.retry {
        return Err(Signal::retry(None));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::ScriptedConsole;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
    }

    fn registry() -> OptionRegistry<Recorder> {
        let mut options = OptionRegistry::new();
        options
            .register(
                "h",
                Callback::plain(|r: &mut Recorder| {
                    r.calls.push("h".into());
                    Ok(())
                }),
            )
            .description("Help.");
        options
            .register(
                "o",
                Callback::keyed(|r: &mut Recorder, key| {
                    r.calls.push(format!("o:{}", key.unwrap_or("-")));
                    Ok(())
                }),
            )
            .description("Options.")
            .lock(true);
        options.bind_input_options("setup", &["h", "o"]);
        options
    }

    #[test]
    fn test_register_is_independent_per_name() {
        let mut options = registry();
        assert!(options.has_option("h"));
        assert!(!options.has_option("x"));

        options.register("x", Callback::plain(|_: &mut Recorder| Ok(())));
        assert!(options.has_option("x"));
        assert_eq!(options.description("h"), Some("Help."));
        assert_eq!(options.len(), 3);
    }

    #[test]
    fn test_register_overwrites_same_name() {
        let mut options = registry();
        options
            .register("h", Callback::plain(|_: &mut Recorder| Ok(())))
            .description("Other help.");
        assert_eq!(options.len(), 2);
        assert_eq!(options.describe("h"), "Other help.");
    }

    #[test]
    fn test_copy_does_not_mutate_original() {
        let original = registry();
        let mut copy = original.copy();
        copy.register("z", Callback::plain(|_: &mut Recorder| Ok(())))
            .description("Zed.");
        copy.register("h", Callback::plain(|_: &mut Recorder| Ok(())))
            .description("Changed.");

        assert!(!original.has_option("z"));
        assert_eq!(original.description("h"), Some("Help."));
        assert_eq!(copy.description("h"), Some("Changed."));
    }

    #[test]
    fn test_dispatch_resolution() {
        let options = registry();
        let console = ScriptedConsole::default();
        let mut rec = Recorder::default();

        options.dispatch(&mut rec, &console, "setup", "h").unwrap();
        assert_eq!(rec.calls, vec!["h"]);

        let err = options.dispatch(&mut rec, &console, "setup", "z").unwrap_err();
        assert_eq!(
            err,
            Signal::Lookup(OptionLookupError::NotRegistered { name: "z".into() })
        );

        let err = options.dispatch(&mut rec, &console, "missing", "h").unwrap_err();
        assert_eq!(
            err,
            Signal::Lookup(OptionLookupError::NameNotInCache {
                key: "missing".into()
            })
        );
    }

    #[test]
    fn test_dispatch_rejects_registered_but_unbound_name() {
        let mut options = registry();
        options.register("q", Callback::plain(|_: &mut Recorder| Ok(())));
        let console = ScriptedConsole::default();
        let mut rec = Recorder::default();

        let err = options.dispatch(&mut rec, &console, "setup", "q").unwrap_err();
        assert!(matches!(
            err,
            Signal::Lookup(OptionLookupError::NotRegistered { .. })
        ));
    }

    #[test]
    fn test_lock_option_receives_key() {
        let options = registry();
        let console = ScriptedConsole::default();
        let mut rec = Recorder::default();

        options.dispatch(&mut rec, &console, "setup", "o").unwrap();
        options.invoke(&mut rec, &console, "o", None).unwrap();
        assert_eq!(rec.calls, vec!["o:setup", "o:-"]);
    }

    #[test]
    fn test_lock_without_keyed_callback_fails() {
        let mut options = registry();
        options
            .register("p", Callback::plain(|_: &mut Recorder| Ok(())))
            .lock(true);
        let console = ScriptedConsole::default();
        let mut rec = Recorder::default();

        let err = options.invoke(&mut rec, &console, "p", Some("setup")).unwrap_err();
        assert_eq!(
            err,
            Signal::Lookup(OptionLookupError::NotLockCompatible { name: "p".into() })
        );
    }

    #[test]
    fn test_retry_and_newline_flags() {
        let mut options = registry();
        options
            .register("h", Callback::plain(|_: &mut Recorder| Ok(())))
            .retry(true)
            .newline(true);
        options
            .register("f", Callback::plain(|_: &mut Recorder| Err(Signal::exit(None))))
            .newline(true);
        let console = ScriptedConsole::default();
        let mut rec = Recorder::default();

        let err = options.invoke(&mut rec, &console, "h", None).unwrap_err();
        assert_eq!(err, Signal::Retry(None));

        let err = options.invoke(&mut rec, &console, "f", None).unwrap_err();
        assert!(err.is_exit());
        assert_eq!(console.transcript(), vec!["", ""]);
    }

    #[test]
    fn test_wildcard_hands_off_to_input_handler() {
        let mut options = registry();
        options.register(
            "ask",
            Callback::response(|r: &mut Recorder, response| {
                r.calls.push(format!("got:{response}"));
                Ok(())
            }),
        );
        options.bind_input_options_with("ask", &["h"], &[(WILDCARD, "Any response.")]);
        let console = ScriptedConsole::default();
        let mut rec = Recorder::default();

        options.dispatch(&mut rec, &console, "ask", "h").unwrap();
        options.dispatch(&mut rec, &console, "ask", "hello").unwrap();
        assert_eq!(rec.calls, vec!["h", "got:hello"]);
    }

    #[test]
    fn test_wildcard_without_handler() {
        let mut options = registry();
        options.bind_input_options("free", &[WILDCARD]);
        let console = ScriptedConsole::default();
        let mut rec = Recorder::default();

        let err = options.dispatch(&mut rec, &console, "free", "x").unwrap_err();
        assert_eq!(
            err,
            Signal::Lookup(OptionLookupError::CallbackNotFound {
                name: "free".into()
            })
        );
    }

    #[test]
    fn test_wildcard_requires_response_handler() {
        let mut options = registry();
        options.register(
            "ask",
            Callback::plain(|r: &mut Recorder| {
                r.calls.push("plain".into());
                Ok(())
            }),
        );
        options.bind_input_options("ask", &[WILDCARD]);
        let console = ScriptedConsole::default();
        let mut rec = Recorder::default();

        let err = options
            .dispatch(&mut rec, &console, "ask", "hello world")
            .unwrap_err();
        assert_eq!(
            err,
            Signal::Lookup(OptionLookupError::CallbackNotFound { name: "ask".into() })
        );
        assert!(rec.calls.is_empty());
    }

    #[test]
    fn test_binding_keeps_order_and_overrides() {
        let mut options = registry();
        options.bind_input_options_with("k", &["o", "h", "o"], &[("*", "Any.")]);
        let binding = options.binding("k").unwrap();
        assert_eq!(binding.accepted(), ["o".to_string(), "h".to_string()]);
        assert_eq!(binding.overrides(), [("*".to_string(), "Any.".to_string())]);
        assert!(binding.has_wildcard());
        assert!(!options.has_binding("other"));
    }
}
