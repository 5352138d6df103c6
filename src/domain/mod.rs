//! Domain layer
//! 메뉴 옵션/제어 흐름 신호/도움말 문서를 외부 의존성 없이 표현한다.

pub mod help;
pub mod option;
pub mod signal;
