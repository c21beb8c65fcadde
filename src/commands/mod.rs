pub mod create;
pub mod diagnostics;
pub mod help;
pub mod init;
pub mod start;
pub mod stop;
pub mod update;
pub mod version;
