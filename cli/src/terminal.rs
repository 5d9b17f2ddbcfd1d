pub mod banner;
pub mod colors;
pub mod logging;
pub mod presenter;
pub mod print;
