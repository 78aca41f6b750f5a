pub mod config;
pub mod logging;

pub mod download;
pub mod error;
pub mod extract;
pub mod http;
pub mod model;
pub mod naming;
pub mod pipeline;
pub mod writer;
