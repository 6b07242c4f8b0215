// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;

pub mod board;
pub mod export;
pub mod logos;
pub mod rankings;
pub mod store;

pub use board::Board;
pub use logos::{resolve, LogoResolver};
pub use rankings::{parse, parse_with, RankEntry};
