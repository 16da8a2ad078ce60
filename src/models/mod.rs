pub mod preferences;
pub mod prompt;

pub use preferences::CarPreferences;
