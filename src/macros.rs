// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! opt_cell {
    // Option<String> → export cell, empty when None
    ($opt:expr) => {
        $opt.as_deref().unwrap_or("").to_string()
    };
    // Option<String> → display cell with a fallback
    ($opt:expr, $fallback:expr) => {
        $opt.as_deref().unwrap_or($fallback).to_string()
    };
}
