pub mod calculator;
pub mod ingest;
pub mod locator;
pub mod logic;
pub mod search;
