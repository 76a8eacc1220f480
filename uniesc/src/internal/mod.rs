pub mod escaper;
pub mod unescaper;
pub mod utils;
