pub mod directory;
pub mod kill_score;
pub mod market_params;
pub mod origin;
pub mod replaceability;
