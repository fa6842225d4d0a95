pub mod cli;
pub mod config;
pub mod joke;
pub mod logging;
pub mod session;
pub mod storage;
pub mod ui;
