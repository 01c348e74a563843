pub mod agents;
pub mod context;
pub mod extractor;
pub mod orchestrator;
pub mod workflow;

#[cfg(test)]
pub(crate) mod test_support;
