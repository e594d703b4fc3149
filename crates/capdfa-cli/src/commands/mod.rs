pub mod dump;
pub mod exec;
pub mod pack;
pub mod run_common;
pub mod stats;
pub mod trace;
