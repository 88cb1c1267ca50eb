pub mod annotate;
pub mod helper;
pub mod init;
pub mod locate;
pub mod select_locale;
