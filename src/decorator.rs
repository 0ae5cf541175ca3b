// Decorator Pattern - Recursive Wrapping with Trait Objects
// Each decorator owns exactly one inner component and wraps its result.

use std::fmt;
use std::str::FromStr;

use crate::narrate::say;
use crate::PatternError;

pub trait Component {
    fn operation(&self) -> String;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ConcreteComponent;

impl Component for ConcreteComponent {
    fn operation(&self) -> String {
        "ConcreteComponent".to_string()
    }
}

fn wrap(label: &str, inner: &dyn Component) -> String {
    format!("{label}({})", inner.operation())
}

// ============================================================================
// Concrete decorators
// ============================================================================

pub struct ConcreteDecoratorA {
    inner: Box<dyn Component>,
}

impl ConcreteDecoratorA {
    pub const LABEL: &'static str = "ConcreteDecoratorA";

    pub fn new(inner: impl Component + 'static) -> Self {
        Self::from_boxed(Box::new(inner))
    }

    pub fn from_boxed(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }

    pub fn try_new(inner: Option<Box<dyn Component>>) -> Result<Self, PatternError> {
        inner.map(Self::from_boxed).ok_or(PatternError::MissingComponent)
    }
}

impl Component for ConcreteDecoratorA {
    fn operation(&self) -> String {
        wrap(Self::LABEL, self.inner.as_ref())
    }
}

pub struct ConcreteDecoratorB {
    inner: Box<dyn Component>,
}

impl ConcreteDecoratorB {
    pub const LABEL: &'static str = "ConcreteDecoratorB";

    pub fn new(inner: impl Component + 'static) -> Self {
        Self::from_boxed(Box::new(inner))
    }

    pub fn from_boxed(inner: Box<dyn Component>) -> Self {
        Self { inner }
    }

    pub fn try_new(inner: Option<Box<dyn Component>>) -> Result<Self, PatternError> {
        inner.map(Self::from_boxed).ok_or(PatternError::MissingComponent)
    }

    /// Extra behavior only reachable through the concrete type.
    /// Independent of whatever this decorator wraps.
    pub fn added_behavior(&self) -> &'static str {
        "AddedBehavior by ConcreteDecoratorB"
    }
}

impl Component for ConcreteDecoratorB {
    fn operation(&self) -> String {
        wrap(Self::LABEL, self.inner.as_ref())
    }
}

// ============================================================================
// Assembling chains from layer tags
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    A,
    B,
}

impl Layer {
    pub fn apply(self, inner: Box<dyn Component>) -> Box<dyn Component> {
        match self {
            Layer::A => Box::new(ConcreteDecoratorA::from_boxed(inner)),
            Layer::B => Box::new(ConcreteDecoratorB::from_boxed(inner)),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Layer::A => ConcreteDecoratorA::LABEL,
            Layer::B => ConcreteDecoratorB::LABEL,
        }
    }
}

impl FromStr for Layer {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" | ConcreteDecoratorA::LABEL => Ok(Layer::A),
            "B" | "b" | ConcreteDecoratorB::LABEL => Ok(Layer::B),
            other => Err(PatternError::UnknownLayer(other.to_string())),
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Wraps `base` in `layers`, first entry innermost.
pub fn build_chain(base: Box<dyn Component>, layers: &[Layer]) -> Box<dyn Component> {
    layers.iter().fold(base, |inner, layer| layer.apply(inner))
}

/// Client code only sees the `Component` capability.
pub fn client_code(component: &dyn Component) -> String {
    let result = component.operation();
    say("Client", format!("Result: {result}"));
    result
}
