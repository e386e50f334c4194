//! Base identity fields shared by every document query.

/// Minimal identity projection present in every composed query.
pub const BASE_FIELDS: &str = "_id, _type";
