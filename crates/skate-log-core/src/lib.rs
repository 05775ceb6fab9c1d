//! Skate log core: nutrition targets from the training plan, plus the
//! entry, settings and backup stores the desktop app sits on.

pub mod benchmarks;
pub mod db;
pub mod entries;
pub mod error;
pub mod nutrition;
pub mod settings;
pub mod trackers;
pub mod transfer;

#[cfg(test)]
pub mod test_utils;

pub use error::{Result, TrackerError};
pub use nutrition::{nutrition_targets, NutritionTargets};
pub use trackers::Tracker;
