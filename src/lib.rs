pub mod cities;
pub mod dataset;
pub mod output;
pub mod stats;
