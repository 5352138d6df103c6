//! Infrastructure layer
//! 터미널/파일시스템과 직접 통신하는 구현체와 도움말 렌더러.

pub mod adapters;
pub mod config;
pub mod render;
