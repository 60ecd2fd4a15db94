pub mod anthropic;
pub mod unavailable;
