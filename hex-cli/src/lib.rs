//! Text front end for the Hex game manager

pub mod shell;

pub use shell::Shell;
