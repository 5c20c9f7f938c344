// Coaching plans: validate a form, render the use case's prompt, call the provider,
// split the reply into the sections the prompt asked for.
// All provider calls go through llm_client; nothing here talks HTTP directly.

pub mod builder;
pub mod handlers;
pub mod partitioner;
pub mod planner;
pub mod prompts;
pub mod use_case;
pub mod validation;
