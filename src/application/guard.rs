//! 신호 가드: 본문을 루프 안에서 실행하며 지정된 신호를 가로챈다.
//!
//! - 정상 반환이면 루프를 끝내고 값을 돌려준다.
//! - 인터럽트는 빈 줄을 출력한 뒤 `Exit`로 바꿔 처리한다.
//! - catch-set에 속한 신호는 텍스트를 출력하고, `Exit`면 종료, 나머지는 본문을 다시 호출한다.
//! - catch-set 밖의 신호는 그대로 호출자에게 전파한다.

use tracing::{debug, warn};

use crate::application::ports::Console;
use crate::domain::signal::{Signal, SignalKind};

/// 가드가 가로챌 신호 종류 집합. 기본값은 전체.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchSet {
    kinds: Vec<SignalKind>,
}

impl Default for CatchSet {
    fn default() -> Self {
        Self::all()
    }
}

impl CatchSet {
    pub fn all() -> Self {
        Self {
            kinds: SignalKind::ALL.to_vec(),
        }
    }

    /// 주어진 종류만 가로챈다. 비어 있으면 전체로 취급한다.
    pub fn only(kinds: &[SignalKind]) -> Self {
        if kinds.is_empty() {
            return Self::all();
        }
        Self {
            kinds: kinds.to_vec(),
        }
    }

    pub fn contains(&self, kind: SignalKind) -> bool {
        self.kinds.contains(&kind)
    }
}

/// `body`를 `catch`에 따라 반복 실행한다.
///
/// 반환값: 정상 완료면 `Ok(Some(value))`, `Exit`를 가로채 종료했으면 `Ok(None)`,
/// 가로채지 않은 신호는 `Err(signal)`.
pub fn catch_signals<T>(
    console: &dyn Console,
    catch: &CatchSet,
    mut body: impl FnMut() -> Result<T, Signal>,
) -> Result<Option<T>, Signal> {
    loop {
        let signal = match body() {
            Ok(value) => return Ok(Some(value)),
            Err(Signal::Interrupted) => {
                console.blank_line();
                Signal::exit(None)
            }
            Err(signal) => signal,
        };

        let caught = signal.kind().is_some_and(|kind| catch.contains(kind));
        if !caught {
            return Err(signal);
        }

        if let Signal::Lookup(err) = &signal {
            warn!(error = %err, "option lookup failed");
        } else {
            debug!(signal = ?signal.kind(), "caught signal");
        }

        let text = signal.text();
        if !text.is_empty() {
            console.print_line(&text);
            console.blank_line();
        }

        if signal.is_exit() {
            return Ok(None);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::ScriptedConsole;

    #[test]
    fn test_restart_loops_until_exit() {
        let console = ScriptedConsole::default();
        let mut count = 0;

        let out = catch_signals(&console, &CatchSet::all(), || -> Result<(), Signal> {
            count += 1;
            if count > 3 {
                return Err(Signal::exit(Some("bye".into())));
            }
            Err(Signal::restart(Some("again".into())))
        })
        .unwrap();

        assert_eq!(out, None);
        let transcript = console.transcript();
        assert_eq!(transcript.iter().filter(|l| *l == "again").count(), 3);
        assert_eq!(transcript, vec!["again", "", "again", "", "again", "", "bye", ""]);
    }

    #[test]
    fn test_normal_return_ends_loop() {
        let console = ScriptedConsole::default();
        let mut tries = 0;
        let out = catch_signals(&console, &CatchSet::default(), || {
            tries += 1;
            if tries < 2 {
                return Err(Signal::retry(None));
            }
            Ok(tries)
        })
        .unwrap();

        assert_eq!(out, Some(2));
        // Retry 기본 텍스트는 비어 있어 아무것도 출력하지 않는다.
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn test_uncaught_signal_propagates() {
        let console = ScriptedConsole::default();
        let retry_only = CatchSet::only(&[SignalKind::Retry]);
        let err = catch_signals(&console, &retry_only, || -> Result<(), Signal> {
            Err(Signal::restart(None))
        })
        .unwrap_err();

        assert_eq!(err, Signal::Restart(None));
        assert!(console.transcript().is_empty());
    }

    #[test]
    fn test_interrupt_becomes_exit() {
        let console = ScriptedConsole::default();
        let out = catch_signals(&console, &CatchSet::all(), || -> Result<(), Signal> {
            Err(Signal::Interrupted)
        })
        .unwrap();

        assert_eq!(out, None);
        assert_eq!(console.transcript(), vec!["", "Goodbye!", ""]);
    }

    #[test]
    fn test_interrupt_escapes_guard_without_exit() {
        let console = ScriptedConsole::default();
        let retry_only = CatchSet::only(&[SignalKind::Retry]);
        let err = catch_signals(&console, &retry_only, || -> Result<(), Signal> {
            Err(Signal::Interrupted)
        })
        .unwrap_err();

        assert!(err.is_exit());
        assert_eq!(console.transcript(), vec![""]);
    }
}
