//! Application layer
//! 옵션 레지스트리/신호 가드/데모 오케스트레이터를 정의하고 포트를 통해 콘솔을 사용한다.

pub mod config;
pub mod demo;
pub mod guard;
pub mod ports;
pub mod registry;
