pub mod config;
pub mod fetch;
pub mod page;
pub mod parse;
pub mod pipeline;
pub mod render;
pub mod report;
