//! Tile kinds, candidate domains, and adjacency rules
//!
//! Defines the tile vocabulary for terrain generation together with the
//! bit-vector domains tracking which kinds a cell may still become and the
//! adjacency table consulted during constraint propagation.

use bitvec::prelude::*;
use std::fmt;

/// Terrain tile kinds available for placement
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Open grassland
    Grass,
    /// Lakes and rivers
    Water,
    /// Dunes bridging grassland and mountains
    Sand,
    /// Rocky peaks
    Mountain,
}

impl TileKind {
    /// Number of distinct tile kinds
    pub const COUNT: usize = 4;

    /// All tile kinds in domain bit order
    pub const ALL: [Self; Self::COUNT] = [Self::Grass, Self::Water, Self::Sand, Self::Mountain];

    /// Bit position of this kind inside a domain
    pub const fn index(self) -> usize {
        match self {
            Self::Grass => 0,
            Self::Water => 1,
            Self::Sand => 2,
            Self::Mountain => 3,
        }
    }

    /// Convert a domain bit position back to a tile kind
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Grass),
            1 => Some(Self::Water),
            2 => Some(Self::Sand),
            3 => Some(Self::Mountain),
            _ => None,
        }
    }

    /// Single-character glyph used for text rendering
    pub const fn glyph(self) -> char {
        match self {
            Self::Grass => 'G',
            Self::Water => 'W',
            Self::Sand => 'S',
            Self::Mountain => 'M',
        }
    }

    /// RGBA color used for image export
    pub const fn color(self) -> [u8; 4] {
        match self {
            Self::Grass => [34, 139, 34, 255],
            Self::Water => [30, 144, 255, 255],
            Self::Sand => [237, 201, 175, 255],
            Self::Mountain => [139, 137, 137, 255],
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Grass => "grass",
            Self::Water => "water",
            Self::Sand => "sand",
            Self::Mountain => "mountain",
        };
        write!(f, "{name}")
    }
}

/// Set of tile kinds a cell may still resolve to
///
/// Backed by a fixed-width bit vector indexed by [`TileKind::index`].
/// Provides O(1) membership testing and efficient set operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileDomain {
    bits: BitVec,
}

impl TileDomain {
    /// Create a domain with no tile kinds present
    pub fn new() -> Self {
        Self {
            bits: bitvec![0; TileKind::COUNT],
        }
    }

    /// Create a domain containing every tile kind
    pub fn all() -> Self {
        Self {
            bits: bitvec![1; TileKind::COUNT],
        }
    }

    /// Insert a tile kind
    pub fn insert(&mut self, kind: TileKind) {
        self.bits.set(kind.index(), true);
    }

    /// Test tile kind membership
    pub fn contains(&self, kind: TileKind) -> bool {
        self.bits.get(kind.index()).as_deref() == Some(&true)
    }

    /// Intersect this domain with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new domain containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Test if no tile kinds remain
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count tile kinds in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// The single remaining kind, if exactly one remains
    pub fn sole(&self) -> Option<TileKind> {
        if self.count() == 1 {
            self.bits.iter_ones().next().and_then(TileKind::from_index)
        } else {
            None
        }
    }

    /// Test whether every kind in this domain is also in `other`
    pub fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|kind| other.contains(kind))
    }

    /// Iterate the kinds present in bit order
    pub fn iter(&self) -> impl Iterator<Item = TileKind> + '_ {
        self.bits.iter_ones().filter_map(TileKind::from_index)
    }

    /// Extract the kinds present as a vector in bit order
    pub fn to_vec(&self) -> Vec<TileKind> {
        self.iter().collect()
    }
}

impl Default for TileDomain {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TileDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileDomain({} kinds: {:?})", self.count(), self.to_vec())
    }
}

/// Adjacency constraints between tile kinds
///
/// For each resolved tile kind, records the set of kinds permitted in the
/// four orthogonally adjacent cells. Rules are consulted from the resolved
/// neighbor's side, so asymmetric tables are representable even though the
/// built-in terrain table happens to be symmetric.
#[derive(Clone, Debug)]
pub struct AdjacencyRules {
    allowed: [TileDomain; TileKind::COUNT],
}

impl AdjacencyRules {
    /// Create rules permitting nothing next to anything
    pub fn new() -> Self {
        Self {
            allowed: std::array::from_fn(|_| TileDomain::new()),
        }
    }

    /// Create rules permitting every kind next to every kind
    pub fn permissive() -> Self {
        Self {
            allowed: std::array::from_fn(|_| TileDomain::all()),
        }
    }

    /// Terrain ruleset: water touches only grass, sand bridges to mountains
    pub fn terrain() -> Self {
        let mut rules = Self::new();
        for kind in TileKind::ALL {
            rules.allow(kind, kind);
        }
        rules.allow(TileKind::Grass, TileKind::Sand);
        rules.allow(TileKind::Grass, TileKind::Water);
        rules.allow(TileKind::Water, TileKind::Grass);
        rules.allow(TileKind::Sand, TileKind::Grass);
        rules.allow(TileKind::Sand, TileKind::Mountain);
        rules.allow(TileKind::Mountain, TileKind::Sand);
        rules
    }

    /// Permit `neighbor` to appear next to a resolved `source` tile
    pub fn allow(&mut self, source: TileKind, neighbor: TileKind) {
        if let Some(domain) = self.allowed.get_mut(source.index()) {
            domain.insert(neighbor);
        }
    }

    /// The set of kinds permitted next to a resolved `kind` tile
    pub const fn permitted(&self, kind: TileKind) -> &TileDomain {
        match kind {
            TileKind::Grass => &self.allowed[0],
            TileKind::Water => &self.allowed[1],
            TileKind::Sand => &self.allowed[2],
            TileKind::Mountain => &self.allowed[3],
        }
    }
}

impl Default for AdjacencyRules {
    fn default() -> Self {
        Self::new()
    }
}
