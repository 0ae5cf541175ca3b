// Simple Factory - Tagged Enum + Constructor Table
// Text tags resolve to a `ProductKind`; the table maps each kind to its
// constructor. Unknown tags are an explicit error.

use std::fmt;
use std::str::FromStr;

use crate::PatternError;

pub trait Product {
    fn operate(&self) -> String;
}

pub struct ConcreteProductA;
impl Product for ConcreteProductA {
    fn operate(&self) -> String {
        "ConcreteProductA operation.".to_string()
    }
}

pub struct ConcreteProductB;
impl Product for ConcreteProductB {
    fn operate(&self) -> String {
        "ConcreteProductB operation.".to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductKind {
    A,
    B,
}

impl ProductKind {
    pub fn tag(self) -> &'static str {
        match self {
            ProductKind::A => "A",
            ProductKind::B => "B",
        }
    }
}

impl FromStr for ProductKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CATALOG
            .iter()
            .map(|(kind, _)| *kind)
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| PatternError::UnknownProduct(s.to_string()))
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

type Constructor = fn() -> Box<dyn Product>;

fn make_a() -> Box<dyn Product> {
    Box::new(ConcreteProductA)
}

fn make_b() -> Box<dyn Product> {
    Box::new(ConcreteProductB)
}

// Indexed by `ProductKind` discriminant.
static CATALOG: [(ProductKind, Constructor); 2] = [(ProductKind::A, make_a), (ProductKind::B, make_b)];

pub struct SimpleFactory;

impl SimpleFactory {
    pub fn create(tag: &str) -> Result<Box<dyn Product>, PatternError> {
        let kind: ProductKind = tag.parse()?;
        Ok(Self::create_kind(kind))
    }

    pub fn create_kind(kind: ProductKind) -> Box<dyn Product> {
        tracing::debug!(%kind, "creating product");
        let (_, construct) = CATALOG[kind as usize];
        construct()
    }

    pub fn kinds() -> impl Iterator<Item = ProductKind> {
        CATALOG.iter().map(|(kind, _)| *kind)
    }
}
