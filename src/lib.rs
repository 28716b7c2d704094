//! fieldcheck - a strict, deterministic object-validation engine

pub mod cli;
pub mod dispatch;
pub mod http_server;
pub mod observability;
pub mod validation;
