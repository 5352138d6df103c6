//! 대화형 데모 세션 실행.

use anyhow::{Result, anyhow};
use tracing::debug;

use crate::application::demo::Demo;
use crate::interface::cli::composition::AppComposition;

/// 기본 데모를 최상위 가드 안에서 실행한다. Exit/인터럽트로 정상 종료된다.
pub fn run_repl(composition: &AppComposition) -> Result<()> {
    let mut demo = composition.basic_demo();
    debug!(width = composition.config().help.width, "starting demo session");
    demo.run_guarded()
        .map_err(|signal| anyhow!("demo stopped unexpectedly: {signal}"))
}
