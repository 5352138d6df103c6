//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use crate::domain::signal::Signal;

/// 콘솔 입출력 포트.
/// 단일 스레드 대화형 루프 전용이므로 `&self`로 호출하고 내부 상태는 구현체가 관리한다.
pub trait Console {
    /// 프롬프트를 출력하고 한 줄을 읽는다(개행 제거).
    /// 사용자 인터럽트나 입력 종료는 `Signal::Interrupted`로 반환한다.
    fn read_line(&self, prompt: &str) -> Result<String, Signal>;

    fn print_line(&self, line: &str);

    fn blank_line(&self) {
        self.print_line("");
    }
}
