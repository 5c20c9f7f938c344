// Static sports fixtures: matches, standings and news served read-only for the
// lifetime of the process. Nothing here talks to the generation provider.

pub mod data;
pub mod handlers;
pub mod service;
