pub mod discovery;
pub mod pipelines;
pub mod report;
