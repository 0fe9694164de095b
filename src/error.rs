use thiserror::Error;

/// Errors surfaced by genome construction and crossover.
///
/// Mutation never fails; its skipped steps (no connection to split, duplicate
/// connection pair) are silent no-ops rather than errors.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// An activation name was not found in the registry during node
    /// construction.
    #[error("unknown activation function `{0}`")]
    UnknownActivation(String),

    /// A connection gene references a node id outside the child's node list.
    #[error("connection references node {id}, but the node list holds {len} nodes")]
    NodeOutOfRange { id: usize, len: usize },
}
