pub mod evaluation;
pub mod keyword_metrics;
pub mod ranking_page;
