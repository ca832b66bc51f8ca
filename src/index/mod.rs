//! Frequency structures built during one extraction call.

pub mod frequency;

pub use frequency::FrequencyTables;
