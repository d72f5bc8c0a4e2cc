pub mod analyzers;
pub mod cleaning;
pub mod config;
pub mod input;
pub mod output;
pub mod overview;
pub mod parser;
pub mod record;
pub mod schema;
