//! Arena-backed object hierarchy
//!
//! All systems of a [`Catalog`] live in one contiguous `Vec<Node>`. Nodes
//! refer to each other by [`NodeId`]: a parent lists its children in document
//! order, and every non-root node keeps a plain index back to its parent.
//!
//! [`AstroObject`] is a cheap `Copy` handle pairing the catalogue with a node
//! id. [`AstroObject::body`] turns it into the closed [`Body`] variant whose
//! per-kind references ([`PlanetRef`], [`StarRef`], ...) carry the measured
//! attributes and derived-quantity operations.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::binary::{BinaryData, BinaryRef};
use crate::catalog::Catalog;
use crate::planet::{PlanetData, PlanetRef};
use crate::star::{StarData, StarRef};
use crate::system::{SystemData, SystemRef};

/// Index of a node in the catalogue arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// `index` must fit in `u32`; the builder checks capacity before inserting
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(u32::try_from(index).is_ok(), "node index {index} exceeds u32");
        Self(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    System,
    Binary,
    Star,
    Planet,
}

impl Kind {
    pub const ALL: [Kind; 4] = [Kind::System, Kind::Binary, Kind::Star, Kind::Planet];

    /// The catalogue element tag for this kind
    pub fn tag(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Binary => "binary",
            Self::Star => "star",
            Self::Planet => "planet",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Binary => "Binary",
            Self::Star => "Star",
            Self::Planet => "Planet",
        }
    }

    /// Whether a record of `child` kind may be nested directly inside this kind
    pub fn allows_child(&self, child: Kind) -> bool {
        match self {
            Self::System => matches!(child, Kind::Star | Kind::Binary),
            Self::Binary => matches!(child, Kind::Star | Kind::Binary | Kind::Planet),
            Self::Star => child == Kind::Planet,
            Self::Planet => false,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(&s.trim().to_ascii_lowercase())
            .ok_or_else(|| format!("unknown object kind '{s}'"))
    }
}

/// Kind-specific measured attributes of a node
#[derive(Debug, Clone)]
pub(crate) enum NodeData {
    System(SystemData),
    Binary(BinaryData),
    Star(StarData),
    Planet(PlanetData),
}

impl NodeData {
    pub(crate) fn kind(&self) -> Kind {
        match self {
            Self::System(_) => Kind::System,
            Self::Binary(_) => Kind::Binary,
            Self::Star(_) => Kind::Star,
            Self::Planet(_) => Kind::Planet,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) name: String,
    pub(crate) alternate_names: Vec<String>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub(crate) data: NodeData,
}

/// Handle to one object in a [`Catalog`].
///
/// Formats as `Kind('name')`, so a list of objects prints as
/// `[Star('Star 4A'), Star('Star 4B')]`.
#[derive(Clone, Copy)]
pub struct AstroObject<'a> {
    catalog: &'a Catalog,
    id: NodeId,
}

impl<'a> AstroObject<'a> {
    pub(crate) fn new(catalog: &'a Catalog, id: NodeId) -> Self {
        Self { catalog, id }
    }

    fn node(self) -> &'a Node {
        self.catalog.node(self.id)
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn catalog(self) -> &'a Catalog {
        self.catalog
    }

    pub fn name(self) -> &'a str {
        &self.node().name
    }

    /// Names after the first `name` field of the record
    pub fn alternate_names(self) -> &'a [String] {
        &self.node().alternate_names
    }

    pub fn kind(self) -> Kind {
        self.node().data.kind()
    }

    pub fn parent(self) -> Option<AstroObject<'a>> {
        self.node().parent.map(|id| Self::new(self.catalog, id))
    }

    /// Direct children in document order
    pub fn children(self) -> Vec<AstroObject<'a>> {
        self.node()
            .children
            .iter()
            .map(|&id| Self::new(self.catalog, id))
            .collect()
    }

    /// Parent, grandparent, ... up to and including the System
    pub fn ancestors(self) -> Ancestors<'a> {
        Ancestors {
            next: self.parent(),
        }
    }

    /// Every object below this one, depth first in document order
    pub fn descendants(self) -> Vec<AstroObject<'a>> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node().children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let object = Self::new(self.catalog, id);
            stack.extend(object.node().children.iter().rev().copied());
            out.push(object);
        }
        out
    }

    /// The closest Star above this object, if any
    pub fn nearest_star(self) -> Option<StarRef<'a>> {
        self.ancestors().find_map(|ancestor| ancestor.as_star())
    }

    /// The System at the root of this object's tree
    pub fn system(self) -> SystemRef<'a> {
        let root = self.ancestors().last().unwrap_or(self);
        match root.body() {
            Body::System(system) => system,
            // the builder only ever roots a tree at a System
            _ => unreachable!("tree rooted at {root}"),
        }
    }

    pub fn body(self) -> Body<'a> {
        match &self.node().data {
            NodeData::System(data) => Body::System(SystemRef::new(self, data)),
            NodeData::Binary(data) => Body::Binary(BinaryRef::new(self, data)),
            NodeData::Star(data) => Body::Star(StarRef::new(self, data)),
            NodeData::Planet(data) => Body::Planet(PlanetRef::new(self, data)),
        }
    }

    pub fn as_system(self) -> Option<SystemRef<'a>> {
        match self.body() {
            Body::System(system) => Some(system),
            _ => None,
        }
    }

    pub fn as_binary(self) -> Option<BinaryRef<'a>> {
        match self.body() {
            Body::Binary(binary) => Some(binary),
            _ => None,
        }
    }

    pub fn as_star(self) -> Option<StarRef<'a>> {
        match self.body() {
            Body::Star(star) => Some(star),
            _ => None,
        }
    }

    pub fn as_planet(self) -> Option<PlanetRef<'a>> {
        match self.body() {
            Body::Planet(planet) => Some(planet),
            _ => None,
        }
    }

    /// Indented dump of this object and everything below it
    pub fn tree(self) -> String {
        let mut out = String::new();
        let mut stack = vec![(self, 0usize)];
        while let Some((object, depth)) = stack.pop() {
            out.push_str(&"  ".repeat(depth));
            out.push_str(&object.to_string());
            out.push('\n');
            for child in object.children().into_iter().rev() {
                stack.push((child, depth + 1));
            }
        }
        out
    }
}

impl PartialEq for AstroObject<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.catalog, other.catalog) && self.id == other.id
    }
}

impl Eq for AstroObject<'_> {}

impl fmt::Display for AstroObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.kind(), self.name())
    }
}

impl fmt::Debug for AstroObject<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

pub struct Ancestors<'a> {
    next: Option<AstroObject<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = AstroObject<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent();
        Some(current)
    }
}

/// An object viewed as its concrete kind
#[derive(Debug, Clone, Copy)]
pub enum Body<'a> {
    System(SystemRef<'a>),
    Binary(BinaryRef<'a>),
    Star(StarRef<'a>),
    Planet(PlanetRef<'a>),
}

impl<'a> Body<'a> {
    pub fn object(self) -> AstroObject<'a> {
        match self {
            Self::System(system) => system.object(),
            Self::Binary(binary) => binary.object(),
            Self::Star(star) => star.object(),
            Self::Planet(planet) => planet.object(),
        }
    }
}

/// Shared plumbing for the per-kind object references: construction, access
/// to the underlying [`AstroObject`] (also through `Deref`) and the
/// `Kind('name')` formatting.
macro_rules! body_ref {
    ($name:ident, $data:ty) => {
        #[derive(Clone, Copy)]
        pub struct $name<'a> {
            object: $crate::object::AstroObject<'a>,
            data: &'a $data,
        }

        impl<'a> $name<'a> {
            pub(crate) fn new(object: $crate::object::AstroObject<'a>, data: &'a $data) -> Self {
                Self { object, data }
            }

            pub fn object(self) -> $crate::object::AstroObject<'a> {
                self.object
            }

            /// The measured catalogue attributes
            pub fn data(self) -> &'a $data {
                self.data
            }
        }

        impl<'a> std::ops::Deref for $name<'a> {
            type Target = $crate::object::AstroObject<'a>;

            fn deref(&self) -> &Self::Target {
                &self.object
            }
        }

        impl std::fmt::Display for $name<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.object, f)
            }
        }

        impl std::fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.object, f)
            }
        }

        impl PartialEq for $name<'_> {
            fn eq(&self, other: &Self) -> bool {
                self.object == other.object
            }
        }
    };
}

pub(crate) use body_ref;
