//! Edge direction and the core edge struct.

use serde::Serialize;

use super::error::{GraphError, GraphResult};
use super::weight::Weight;

/// Position of a vertex in its graph's vertex arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for VertexId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Position of an edge in its graph's edge list (creation order).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// The raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for EdgeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// How an edge relates its left and right endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Both endpoints reach each other.
    Undirected,
    /// Left endpoint is the source.
    LeftToRight,
    /// Right endpoint is the source.
    RightToLeft,
}

impl Direction {
    /// Whether this token describes an arc rather than a plain link.
    pub fn is_directed(self) -> bool {
        !matches!(self, Self::Undirected)
    }

    /// The token describing the same arc with endpoints swapped.
    pub fn reversed(self) -> Self {
        match self {
            Self::Undirected => Self::Undirected,
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::LeftToRight,
        }
    }

    /// Return a human-readable name for this direction.
    pub fn name(self) -> &'static str {
        match self {
            Self::Undirected => "undirected",
            Self::LeftToRight => "left_to_right",
            Self::RightToLeft => "right_to_left",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A link between two vertices of the same graph.
#[derive(Debug)]
pub struct Edge {
    left: VertexId,
    right: VertexId,
    weight: Weight,
    direction: Direction,
}

impl Edge {
    /// Create an edge between two arena positions.
    pub fn new(left: VertexId, right: VertexId, direction: Direction, weight: Weight) -> Self {
        Self {
            left,
            right,
            weight,
            direction,
        }
    }

    /// Left endpoint, as given at creation.
    pub fn left(&self) -> VertexId {
        self.left
    }

    /// Right endpoint, as given at creation.
    pub fn right(&self) -> VertexId {
        self.right
    }

    /// The edge's direction token.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The edge's cost.
    pub fn weight(&self) -> &Weight {
        &self.weight
    }

    pub fn is_directed(&self) -> bool {
        self.direction.is_directed()
    }

    pub fn is_weighted(&self) -> bool {
        !self.weight.is_none()
    }

    /// Endpoints as (source, target). Undirected edges report (left, right).
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        match self.direction {
            Direction::RightToLeft => (self.right, self.left),
            Direction::Undirected | Direction::LeftToRight => (self.left, self.right),
        }
    }

    /// Whether `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.left == vertex || self.right == vertex
    }

    /// The endpoint across from `vertex`, if `vertex` is an endpoint.
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.left == vertex {
            Some(self.right)
        } else if self.right == vertex {
            Some(self.left)
        } else {
            None
        }
    }

    /// Whether two edges describe the same link.
    ///
    /// Undirected edges match regardless of endpoint order. Directed edges
    /// match with the same endpoints and direction, or with swapped
    /// endpoints and the reversed direction. Comparing a directed edge with
    /// an undirected one is an integrity fault.
    pub fn same_link(&self, other: &Edge) -> GraphResult<bool> {
        if self.is_directed() != other.is_directed() {
            return Err(GraphError::integrity(
                "directed edges coexisting with undirected edges",
            ));
        }

        let same = self.left == other.left && self.right == other.right;
        let swapped = self.left == other.right && self.right == other.left;

        if !self.is_directed() {
            return Ok(same || swapped);
        }

        Ok((same && self.direction == other.direction)
            || (swapped && self.direction == other.direction.reversed()))
    }
}
