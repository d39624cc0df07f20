// Match engine: per-job scoring, ranking across a job set, and the HTTP handlers
// that expose both. Scoring is pure and synchronous; only pacing touches the runtime.

pub mod experience;
pub mod handlers;
pub mod ranking;
pub mod scorer;
pub mod weights;
