// Resume editor data: typed record, section updates, starter templates.

pub mod handlers;
pub mod models;
pub mod templates;
pub mod update;
