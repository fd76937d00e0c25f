pub mod go;
pub mod init;
pub mod install;
pub mod links;
pub mod misc;
pub mod notes;
