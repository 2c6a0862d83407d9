pub mod campaign;
pub mod cli;
pub mod logging;
pub mod source;
pub mod ui;
