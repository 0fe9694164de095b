//! A NEAT-style genetic encoding for evolving neural-network topologies.
//!
//! A [`Genome`] owns an ordered list of node genes and a list of directed,
//! weighted connection genes between them. Genomes are built fully connected
//! by [`Genome::new`], mutated in place by [`Genome::mutate`], and recombined
//! into offspring by [`Genome::crossover`]. Fitness evaluation, speciation
//! and phenotype execution are left to the surrounding evolutionary driver.
//!
//! Every stochastic operation takes an explicit `&mut impl Rng`, so outcomes
//! are reproducible under a fixed seed.

pub mod activation;

mod error;
mod genome;
mod model;

pub use error::Error;
pub use genome::Genome;
pub use model::{ConnGene, NodeGene, NodeRole};
