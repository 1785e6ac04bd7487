// Core business logic module

pub mod alerts;
pub mod diagnostics;
pub mod monitor;
pub mod probe;
pub mod recommend;
pub mod report;
