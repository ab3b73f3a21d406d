// lib.rs - Root module for the product_search library
//
// The web application lives in web_app. Built with `--features csr` it
// compiles to WASM and mounts from main.rs; without features only the
// framework-independent layers are compiled, which is what the tests use.

pub mod web_app;
