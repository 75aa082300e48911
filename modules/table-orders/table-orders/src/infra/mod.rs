pub mod menu_file;
pub mod qr;
pub mod storage;
