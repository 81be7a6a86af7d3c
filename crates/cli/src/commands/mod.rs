pub mod check;
pub mod error;
pub mod gas;
pub mod init;
pub mod run;
