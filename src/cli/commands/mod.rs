pub mod bump;
pub mod check;
pub mod generate;
pub mod init;
pub mod new;
