pub mod assertions;
pub mod league_builders;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use assertions::StandingsAssertion;
#[allow(unused_imports)]
pub use league_builders::{ArchiveRoundBuilder, RaceBuilder};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
