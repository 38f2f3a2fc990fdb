pub mod config;
pub mod init;
pub mod play;
pub mod reset;
pub mod screen;
pub mod show;
