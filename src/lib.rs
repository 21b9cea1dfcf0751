#![forbid(unsafe_code)]

pub mod assemble;
pub mod cli;
pub mod config;
pub mod cover;
pub mod logging;
pub mod markdown;
pub mod pages;
pub mod paths;
pub mod pdftk;
