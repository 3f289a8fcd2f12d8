pub mod aggregator;
pub mod punch;
pub mod report;
pub mod sequencer;
