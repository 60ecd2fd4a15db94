pub mod dataforseo;
pub mod narrators;
