// Boards
// Named collections of briefs shared with designers, one JSON blob per board.

pub mod handlers;
pub mod models;
pub mod store;
