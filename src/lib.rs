pub mod circuit;
pub mod config;
pub mod error;
pub mod export;
pub mod goods;
pub mod hex;
pub mod loader;
pub mod optimizer;
pub mod profit;
pub mod routes;
pub mod world;
// cmd and reports are binary modules (in main.rs), kept out of the library
// surface: everything they do goes through the public API above.
