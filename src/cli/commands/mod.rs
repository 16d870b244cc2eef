pub mod board;
pub mod config;
pub mod init;
pub mod next;
pub mod onshift;
pub mod refresh;
pub mod today;
pub mod watch;
