//! `cli-demo` 바이너리 진입점.

use cli_demo::interface::cli::{Cli, CliAction};

fn main() {
    // 로그는 stderr로 보내 메뉴 출력과 섞이지 않게 한다.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let action = match Cli::parse_action() {
        Ok(action) => action,
        Err(msg) => {
            eprintln!("error: {msg}");
            std::process::exit(2);
        }
    };

    match action {
        CliAction::InspectConfig { config } => {
            match cli_demo::inspect_config_pretty_json(config.as_deref()) {
                Ok(json) => println!("{json}"),
                Err(err) => {
                    eprintln!("error: {err:#}");
                    std::process::exit(1);
                }
            }
        }
        CliAction::Interactive(options) => {
            if let Err(err) = cli_demo::run(&options) {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
