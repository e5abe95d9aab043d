mod country;
mod difficulty;
mod ids;
mod progress;

pub use country::{Continent, ContinentFilter, ContinentParseError, Country};
pub use difficulty::{Difficulty, DifficultyParseError};
pub use ids::{CountryCode, CountryCodeError};
pub use progress::{BestStreaks, MASTERY_THRESHOLD, Progress, ProgressEntry, ProgressStore};
