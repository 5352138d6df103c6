use std::rc::Rc;

use cli_demo::application::config::{DemoConfig, HelpStyle};
use cli_demo::domain::help::HelpDocument;
use cli_demo::infrastructure::adapters::ScriptedConsole;
use cli_demo::interface::cli::{AppComposition, BasicDemo, SETUP_KEY};
use cli_demo::{
    Callback, CallbackResult, Demo, DemoCore, OptionLookupError, OptionRegistry, Signal,
    base_options,
};

const PROMPT: &str = "Select an option, or type something random: ";

fn basic_session(responses: &[&str]) -> Vec<String> {
    let console = Rc::new(ScriptedConsole::new(responses.iter().copied()));
    let composition = AppComposition::with_console(DemoConfig::default(), console.clone());
    let mut demo = composition.basic_demo();
    demo.run_guarded().unwrap();
    console.transcript()
}

fn options_block() -> Vec<String> {
    [
        "Options:",
        " *: Any response.",
        " h: Help.",
        " o: Options.",
        " r: Restart.",
        " q: Quit.",
        "",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn test_any_response_then_quit() {
    let transcript = basic_session(&["hello", "q"]);

    let mut expected = vec!["Welcome to BasicDemo!".to_string(), String::new()];
    expected.extend(options_block());
    expected.extend(
        [
            format!("{PROMPT}hello"),
            "Got: hello".to_string(),
            String::new(),
            format!("{PROMPT}q"),
            "Goodbye!".to_string(),
            String::new(),
        ]
        .into_iter(),
    );
    assert_eq!(transcript, expected);
}

#[test]
fn test_restart_reruns_without_intro() {
    let transcript = basic_session(&["r", "q"]);

    let count = |needle: &str| transcript.iter().filter(|l| l.as_str() == needle).count();
    assert_eq!(count("Welcome to BasicDemo!"), 1);
    assert_eq!(count("Options:"), 2);
    assert_eq!(count("Restarting."), 1);
    assert_eq!(transcript.last().map(String::as_str), Some(""));
}

#[test]
fn test_help_and_options_retry_the_prompt() {
    let transcript = basic_session(&["h", "o", "q"]);

    assert!(transcript.iter().any(|l| l.trim() == "Help"));
    assert!(transcript.iter().any(|l| l == "Demo"));
    // 초기 목록 + `o` 응답으로 두 번 출력된다.
    assert_eq!(transcript.iter().filter(|l| *l == "Options:").count(), 2);
    assert_eq!(
        transcript.iter().filter(|l| l.starts_with(PROMPT)).count(),
        3
    );
}

#[test]
fn test_end_of_input_exits_gracefully() {
    let transcript = basic_session(&[]);
    let tail: Vec<&str> = transcript.iter().rev().take(3).map(String::as_str).collect();
    assert_eq!(tail, vec!["", "Goodbye!", ""]);
}

struct Greeter {
    core: DemoCore<Greeter>,
    greeted: Vec<String>,
}

impl Greeter {
    fn options() -> OptionRegistry<Self> {
        let mut options = base_options::<Self>();
        options
            .register("g", Callback::plain(|demo: &mut Greeter| demo.greet()))
            .description("Greet.")
            .retry(true);
        options.bind_input_options("greet", &["g", "o", "q"]);
        options
    }

    fn new(console: Rc<ScriptedConsole>, config: DemoConfig) -> Self {
        Self {
            core: DemoCore::new("Greeter", Self::options(), console, config),
            greeted: Vec::new(),
        }
    }

    fn greet(&mut self) -> CallbackResult {
        self.greeted.push("hi".into());
        self.core().console().print_line("Hi!");
        Ok(())
    }
}

impl Demo for Greeter {
    fn core(&self) -> &DemoCore<Self> {
        &self.core
    }

    fn core_mut(&mut self) -> &mut DemoCore<Self> {
        &mut self.core
    }

    fn run(&mut self) -> CallbackResult {
        self.retry_input(|demo| demo.prompt("greet", "greet> "))
    }

    fn help_documents(&self) -> Vec<HelpDocument> {
        let mut docs = vec![HelpDocument::new("Demo", "Base text.")];
        docs.push(HelpDocument::new("Greeter", "Greets you.\n    Press g."));
        docs
    }
}

#[test]
fn test_derived_demo_extends_its_own_registry() {
    let console = Rc::new(ScriptedConsole::new(["g", "g", "x", "q"]));
    let mut demo = Greeter::new(console.clone(), DemoConfig::default());
    demo.run_guarded().unwrap();

    assert_eq!(demo.greeted.len(), 2);
    let transcript = console.transcript();
    assert!(transcript.contains(&"'x' not registered.".to_string()));
    assert_eq!(transcript.last().map(String::as_str), Some(""));

    // 기본 데모 레지스트리에는 영향이 없다.
    assert!(!BasicDemo::options().has_option("g"));
    assert!(BasicDemo::options().has_binding(SETUP_KEY));
}

#[test]
fn test_help_documents_base_first_and_filterable() {
    let console = Rc::new(ScriptedConsole::default());
    let demo = Greeter::new(console.clone(), DemoConfig::default());

    demo.print_help_with(&HelpStyle::default());
    let transcript = console.transcript();
    let base = transcript.iter().position(|l| l == "Demo").unwrap();
    let derived = transcript.iter().position(|l| l == "Greeter").unwrap();
    assert!(base < derived);
    assert!(transcript.contains(&"  ● Press g.".to_string()));

    let console = Rc::new(ScriptedConsole::default());
    let demo = Greeter::new(console.clone(), DemoConfig::default());
    demo.print_help_with(&HelpStyle {
        include: false,
        ..HelpStyle::default()
    });
    let transcript = console.transcript();
    assert!(!transcript.contains(&"Demo".to_string()));
    assert!(transcript.contains(&"Greeter".to_string()));
}

#[test]
fn test_unbound_input_key_surfaces_lookup_error() {
    let console = Rc::new(ScriptedConsole::default());
    let mut demo = Greeter::new(console.clone(), DemoConfig::default());

    let err = demo.dispatch("nowhere", "g").unwrap_err();
    assert_eq!(
        err,
        Signal::Lookup(OptionLookupError::NameNotInCache {
            key: "nowhere".into()
        })
    );
}
