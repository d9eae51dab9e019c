pub mod career_points;
pub mod fastest_lap;
pub mod finishing;
pub mod retirements;

pub use career_points::CareerPointsCollector;
pub use fastest_lap::FastestLapCollector;
pub use finishing::FinishingCollector;
pub use retirements::RetirementCollector;
