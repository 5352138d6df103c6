//! Interface layer
//! CLI 진입점과 대화형 세션.

pub mod cli;
