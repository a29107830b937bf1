#![warn(rust_2018_idioms)]

pub mod convert;
pub mod input;
pub mod stats;
pub mod util;
pub mod wordcount;
