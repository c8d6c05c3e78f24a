pub mod config;
pub mod consts;
pub mod models;
pub mod session;
pub mod utils;
pub mod view;
