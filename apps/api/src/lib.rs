//! InternMatch: internship matching, skill-gap analysis and course
//! recommendations over read-only catalogs.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod matching;
pub mod resume;
pub mod routes;
pub mod session;
pub mod state;
