//! Process-wide registry of named activation functions.
//!
//! Nodes resolve an activation by name once, at construction time, and hold
//! the returned `&'static` reference from then on. The registry is immutable
//! after initialization and safe to read from any thread.

use std::collections::HashMap;
use std::fmt;

use fastapprox::fast;
use once_cell::sync::Lazy;

use crate::error::Error;

/// A named, pure scalar function applied to a node's summed input.
pub struct Activation {
    name: &'static str,
    func: fn(f64) -> f64,
}

impl Activation {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn apply(&self, x: f64) -> f64 {
        (self.func)(x)
    }
}

impl fmt::Debug for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Activation").field(&self.name).finish()
    }
}

impl PartialEq for Activation {
    // one canonical entry per name, so name equality is identity
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

fn identity(x: f64) -> f64 {
    x
}

fn sigmoid(x: f64) -> f64 {
    f64::from(fast::sigmoid(x as f32))
}

fn tanh(x: f64) -> f64 {
    f64::from(fast::tanh(x as f32))
}

fn relu(x: f64) -> f64 {
    x.max(0.0)
}

pub static IDENTITY: Activation = Activation { name: "identity", func: identity };
pub static SIGMOID: Activation = Activation { name: "sigmoid", func: sigmoid };
pub static TANH: Activation = Activation { name: "tanh", func: tanh };
pub static RELU: Activation = Activation { name: "relu", func: relu };

static REGISTRY: Lazy<HashMap<&'static str, &'static Activation>> = Lazy::new(|| {
    let mut registry = HashMap::new();
    for entry in &[&IDENTITY, &SIGMOID, &TANH, &RELU] {
        registry.insert(entry.name, *entry);
    }
    registry
});

/// Resolves an activation by name. An unknown name is a configuration error,
/// fatal to whichever node construction triggered the lookup.
pub fn lookup(name: &str) -> Result<&'static Activation, Error> {
    REGISTRY
        .get(name)
        .copied()
        .ok_or_else(|| Error::UnknownActivation(name.to_owned()))
}
