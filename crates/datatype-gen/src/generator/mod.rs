pub(crate) mod adapters;
pub(crate) mod codegen;
pub mod metrics;
pub(crate) mod model;
pub mod orchestrator;
pub(crate) mod property;
pub(crate) mod resolver;
pub(crate) mod schema;
pub(crate) mod synthesizer;
pub(crate) mod unset;

#[cfg(test)]
mod tests;
