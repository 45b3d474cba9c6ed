pub mod app;
pub mod log;
