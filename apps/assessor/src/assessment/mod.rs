// Job description assessment: prompt → model → profile, plus skill weighting.
// All model calls go through llm_client::ChatModel.

pub mod handlers;
pub mod jd_parser;
pub mod prompts;
pub mod skill_weights;
