use std::fmt;

use crate::activation::Activation;

/// Role a node plays in the encoded network.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeRole {
    Input,
    Hidden,
    Output,
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeRole::Input => "input",
            NodeRole::Hidden => "hidden",
            NodeRole::Output => "output",
        };
        f.write_str(name)
    }
}

/// One neuron of the encoded network. Immutable once created; its id equals
/// its position in the owning genome's node list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodeGene {
    pub(crate) id: usize,
    pub(crate) role: NodeRole,
    pub(crate) activation: &'static Activation,
}

impl NodeGene {
    pub(crate) fn new(id: usize, role: NodeRole, activation: &'static Activation) -> Self {
        NodeGene { id, role, activation }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn role(&self) -> NodeRole {
        self.role
    }

    pub fn activation(&self) -> &'static Activation {
        self.activation
    }
}

impl fmt::Display for NodeGene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}({}, {})]", self.role, self.id, self.activation.name())
    }
}

/// A directed, weighted edge between two nodes of the same genome, stored by
/// node id. Connections start enabled; disabling is the only removal a
/// genome ever performs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnGene {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) weight: f64,
    pub(crate) disabled: bool,
}

impl ConnGene {
    pub(crate) fn new(from: usize, to: usize, weight: f64) -> Self {
        ConnGene { from, to, weight, disabled: false }
    }

    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn render(&self, nodes: &[NodeGene]) -> String {
        let weight = if self.disabled {
            "/".to_owned()
        } else {
            format!("{:.3}", self.weight)
        };
        format!("{}--{}--{}", nodes[self.from], weight, nodes[self.to])
    }
}
