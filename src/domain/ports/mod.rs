pub mod keyword_provider;
pub mod narrator;
pub mod serp_provider;
