// Matching core: skill comparison, match scoring, gap analysis, course lookup.
// Everything here is pure over its inputs. Catalogs come from the providers in
// `crate::catalog`; candidate skills are always passed in by the caller.

pub mod courses;
pub mod gaps;
pub mod handlers;
pub mod scorer;
pub mod skill_match;
