//! Broad-phase spatial index over the maze walls.
//!
//! A quadtree keyed on wall bounding rectangles. Walls are inserted once at
//! startup and never move, so the tree is read-only afterwards. Queries return
//! every wall whose rectangle intersects the query rectangle: a superset of
//! the true overlaps (callers run their own exact tests), never a subset.

use crate::types::Rect;

/// A static wall segment. Owned by the index once inserted; the index is the
/// sole lookup path for wall data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    pub rect: Rect,
}

/// Counters describing the tree shape, for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IndexStats {
    pub nodes: usize,
    pub walls: usize,
    pub max_depth: usize,
}

#[derive(Debug)]
struct Node {
    bounds: Rect,
    depth: usize,
    walls: Vec<Wall>,
    children: Option<Box<[Node; 4]>>,
}

impl Node {
    fn new(bounds: Rect, depth: usize) -> Self {
        Node {
            bounds,
            depth,
            walls: Vec::new(),
            children: None,
        }
    }

    fn insert(&mut self, wall: Wall, bucket_size: usize, max_depth: usize) {
        if let Some(children) = &mut self.children {
            for child in children.iter_mut() {
                if child.bounds.contains(&wall.rect) {
                    child.insert(wall, bucket_size, max_depth);
                    return;
                }
            }
            // Straddles a quadrant boundary; stays at this node.
            self.walls.push(wall);
            return;
        }

        self.walls.push(wall);
        if self.walls.len() > bucket_size && self.depth < max_depth {
            self.subdivide(bucket_size, max_depth);
        }
    }

    fn subdivide(&mut self, bucket_size: usize, max_depth: usize) {
        crate::debug_index!(
            "Splitting depth-{} node holding {} walls",
            self.depth,
            self.walls.len()
        );
        let half_w = self.bounds.w / 2.0;
        let half_h = self.bounds.h / 2.0;
        let x = self.bounds.x;
        let y = self.bounds.y;
        let depth = self.depth + 1;

        self.children = Some(Box::new([
            Node::new(Rect::new(x, y, half_w, half_h), depth),
            Node::new(Rect::new(x + half_w, y, half_w, half_h), depth),
            Node::new(Rect::new(x, y + half_h, half_w, half_h), depth),
            Node::new(Rect::new(x + half_w, y + half_h, half_w, half_h), depth),
        ]));

        // Push down every wall that fits entirely inside one quadrant.
        let walls = std::mem::take(&mut self.walls);
        for wall in walls {
            self.insert(wall, bucket_size, max_depth);
        }
    }

    fn query<'a>(&'a self, range: &Rect, out: &mut Vec<&'a Wall>) {
        for wall in &self.walls {
            if wall.rect.intersects(range) {
                out.push(wall);
            }
        }
        if let Some(children) = &self.children {
            for child in children.iter() {
                // Children only hold walls fully inside their bounds, so this
                // prune cannot drop a true overlap.
                if child.bounds.intersects(range) {
                    child.query(range, out);
                }
            }
        }
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Wall>) {
        out.extend(self.walls.iter());
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect(out);
            }
        }
    }

    fn collect_stats(&self, stats: &mut IndexStats) {
        stats.nodes += 1;
        stats.walls += self.walls.len();
        stats.max_depth = stats.max_depth.max(self.depth);
        if let Some(children) = &self.children {
            for child in children.iter() {
                child.collect_stats(stats);
            }
        }
    }
}

/// Quadtree over the playfield. Walls whose padded rectangles poke past the
/// root bounds are kept at the root rather than rejected.
#[derive(Debug)]
pub struct WallIndex {
    root: Node,
    bucket_size: usize,
    max_depth: usize,
    len: usize,
}

impl WallIndex {
    pub fn new(bounds: Rect) -> Self {
        WallIndex {
            root: Node::new(bounds, 0),
            bucket_size: crate::config::INDEX_BUCKET_SIZE,
            max_depth: crate::config::INDEX_MAX_DEPTH,
            len: 0,
        }
    }

    pub fn insert(&mut self, wall: Wall) {
        self.root.insert(wall, self.bucket_size, self.max_depth);
        self.len += 1;
    }

    /// All walls whose rectangle intersects `range`. Pure: repeated calls on
    /// the same index and range return the same set. Order is unspecified.
    pub fn query(&self, range: &Rect) -> Vec<&Wall> {
        let mut out = Vec::new();
        self.root.query(range, &mut out);
        out
    }

    /// Every wall in the index, in unspecified order. The renderer uses this
    /// to draw the full maze; collision paths go through `query`.
    pub fn walls(&self) -> Vec<&Wall> {
        let mut out = Vec::new();
        self.root.collect(&mut out);
        out
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn stats(&self) -> IndexStats {
        let mut stats = IndexStats::default();
        self.root.collect_stats(&mut stats);
        stats
    }
}
