pub mod plots;
pub mod tables;
pub mod viewdata;
pub mod windows;
