pub mod evaluate;
pub mod narrate;
pub mod sourcing;
pub mod synthetic;
