use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;

use log::{debug, trace};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::activation;
use crate::error::Error;
use crate::model::{ConnGene, NodeGene, NodeRole};

/// Scale applied to freshly drawn connection weights.
const WEIGHT_SCALE: f64 = 6.0;

fn draw_weight(rng: &mut impl Rng) -> f64 {
    rng.sample::<f64, _>(StandardNormal) * WEIGHT_SCALE
}

/// An encoded network topology: an ordered list of node genes plus the
/// connection genes between them.
///
/// Invariant: `nodes[i].id() == i`. New nodes are appended with the next
/// free id, and crossover resolves connection endpoints by indexing the node
/// list directly. Connection endpoints always refer to nodes of the owning
/// genome.
#[derive(Clone, Debug, PartialEq)]
pub struct Genome {
    id: usize,
    nodes: Vec<NodeGene>,
    conns: Vec<ConnGene>,
}

impl Genome {
    /// Builds an initial genome that fully connects `num_inputs` input nodes
    /// (identity activation) to `num_outputs` output nodes (sigmoid).
    /// Connection weights are drawn from N(0, 1) scaled by 6.0.
    pub fn new(
        id: usize,
        num_inputs: usize,
        num_outputs: usize,
        rng: &mut impl Rng,
    ) -> Result<Self, Error> {
        let identity = activation::lookup("identity")?;
        let sigmoid = activation::lookup("sigmoid")?;

        let mut nodes = Vec::with_capacity(num_inputs + num_outputs);
        let mut conns = Vec::with_capacity(num_inputs * num_outputs);

        for i in 0..num_inputs {
            nodes.push(NodeGene::new(i, NodeRole::Input, identity));
        }
        for i in num_inputs..num_inputs + num_outputs {
            nodes.push(NodeGene::new(i, NodeRole::Output, sigmoid));
            for j in 0..num_inputs {
                conns.push(ConnGene::new(j, i, draw_weight(rng)));
            }
        }

        Ok(Genome { id, nodes, conns })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn nodes(&self) -> &[NodeGene] {
        &self.nodes
    }

    pub fn conns(&self) -> &[ConnGene] {
        &self.conns
    }

    /// Mutates the genome in place through three independent steps, each
    /// gated by its own rate: perturb every connection weight, split a
    /// random connection with a new hidden node, and connect two random
    /// nodes. All three may fire in a single call, in that order.
    pub fn mutate(
        &mut self,
        rate_perturb: f64,
        rate_add_node: f64,
        rate_add_conn: f64,
        rng: &mut impl Rng,
    ) {
        for conn in self.conns.iter_mut() {
            if rng.gen::<f64>() < rate_perturb {
                conn.weight += rng.sample::<f64, _>(StandardNormal);
            }
        }

        if rng.gen::<f64>() < rate_add_node && !self.conns.is_empty() {
            self.add_node(rng);
        }

        if rng.gen::<f64>() < rate_add_conn && !self.nodes.is_empty() {
            self.add_conn(rng);
        }
    }

    // Splits a randomly chosen connection with a fresh hidden node. The
    // original connection is disabled but kept as a gene-history marker; the
    // incoming half gets weight 1.0 and the outgoing half inherits the
    // original weight.
    fn add_node(&mut self, rng: &mut impl Rng) {
        let selected = rng.gen_range(0, self.conns.len());
        let split = self.conns[selected];
        let new_id = self.nodes.len();

        self.conns[selected].disabled = true;
        self.nodes
            .push(NodeGene::new(new_id, NodeRole::Hidden, &activation::SIGMOID));
        self.conns.push(ConnGene::new(split.from, new_id, 1.0));
        self.conns.push(ConnGene::new(new_id, split.to, split.weight));

        debug!(
            "genome {}: split connection {}->{} with hidden node {}",
            self.id, split.from, split.to, new_id
        );
    }

    // Connects two nodes picked uniformly at random, with replacement. A
    // pair that already has a connection is skipped silently.
    fn add_conn(&mut self, rng: &mut impl Rng) {
        let from = rng.gen_range(0, self.nodes.len());
        let to = rng.gen_range(0, self.nodes.len());

        if self.conns.iter().any(|conn| conn.from == from && conn.to == to) {
            trace!(
                "genome {}: connection {}->{} already present, skipping",
                self.id, from, to
            );
            return;
        }

        self.conns.push(ConnGene::new(from, to, draw_weight(rng)));
        debug!("genome {}: added connection {}->{}", self.id, from, to);
    }

    /// Combines two parent genomes into an independent child genome.
    ///
    /// Parent connections are aligned by their `(from, to)` pair. Pairs
    /// present in both parents are taken from either with equal probability;
    /// pairs present in only one parent are always carried over. The child's
    /// node list is a copy of the parent with more nodes (ties favor `g0`).
    ///
    /// Fails with [`Error::NodeOutOfRange`] when an aligned gene references
    /// a node id the child node list does not cover, rather than producing a
    /// malformed child.
    pub fn crossover(id: usize, g0: &Genome, g1: &Genome, rng: &mut impl Rng) -> Result<Self, Error> {
        let mut aligned: HashMap<(usize, usize), &ConnGene> = HashMap::new();
        for conn in g0.conns.iter() {
            aligned.insert((conn.from, conn.to), conn);
        }
        for conn in g1.conns.iter() {
            match aligned.entry((conn.from, conn.to)) {
                Entry::Occupied(mut entry) => {
                    if rng.gen::<f64>() < 0.5 {
                        entry.insert(conn);
                    }
                }
                Entry::Vacant(entry) => {
                    entry.insert(conn);
                }
            }
        }

        let larger = if g1.nodes.len() > g0.nodes.len() { g1 } else { g0 };
        let nodes = larger.nodes.clone();

        let mut conns = Vec::with_capacity(aligned.len());
        for conn in aligned.values() {
            if conn.from >= nodes.len() {
                return Err(Error::NodeOutOfRange { id: conn.from, len: nodes.len() });
            }
            if conn.to >= nodes.len() {
                return Err(Error::NodeOutOfRange { id: conn.to, len: nodes.len() });
            }
            conns.push(**conn);
        }

        debug!(
            "crossover of genomes {} and {}: child {} with {} nodes, {} connections",
            g0.id,
            g1.id,
            id,
            nodes.len(),
            conns.len()
        );

        Ok(Genome { id, nodes, conns })
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Genome({}):", self.id)?;
        for conn in self.conns.iter() {
            write!(f, "\n{}", conn.render(&self.nodes))?;
        }
        Ok(())
    }
}
