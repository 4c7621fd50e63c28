#![allow(dead_code)]

pub mod generate;
pub use generate::*;

pub mod logger;
pub use logger::*;

pub mod stat;
pub use stat::*;

pub mod table;
pub use table::*;
