// Candidate sessions: the caller-owned skill list and its processed flag.
// Scoring never reads sessions directly; handlers copy the skills out and
// hand them to the matching core.

pub mod handlers;
pub mod store;
