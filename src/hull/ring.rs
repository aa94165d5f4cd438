use slotmap::SlotMap;

use crate::math::Point2;

slotmap::new_key_type! {
    /// Stable identifier of a vertex in a [`VertexRing`].
    pub struct VertexKey;
}

#[derive(Debug, Clone)]
struct Node {
    point: Point2,
    prev: VertexKey,
    next: VertexKey,
}

/// Circular double-ended sequence of hull vertices.
///
/// Nodes live in an arena and are linked into a cycle through their keys, so
/// pushes, pops and rotations at either end are O(1) and keys stay valid
/// until their vertex is popped. The element after `last` is `first`.
#[derive(Debug, Clone, Default)]
pub struct VertexRing {
    nodes: SlotMap<VertexKey, Node>,
    head: Option<VertexKey>,
}

impl VertexRing {
    /// Creates an empty ring.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices in the ring.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the ring holds no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `point` before the current first vertex and makes it first.
    pub fn push_first(&mut self, point: Point2) -> VertexKey {
        let key = self.link_before_head(point);
        self.head = Some(key);
        key
    }

    /// Inserts `point` after the current last vertex.
    pub fn push_last(&mut self, point: Point2) -> VertexKey {
        self.link_before_head(point)
    }

    /// Removes the first vertex.
    pub fn pop_first(&mut self) -> Option<(VertexKey, Point2)> {
        let key = self.first_key()?;
        Some((key, self.unlink(key)))
    }

    /// Removes the last vertex.
    pub fn pop_last(&mut self) -> Option<(VertexKey, Point2)> {
        let key = self.last_key()?;
        Some((key, self.unlink(key)))
    }

    /// Key of the first vertex.
    #[must_use]
    pub fn first_key(&self) -> Option<VertexKey> {
        self.head
    }

    /// Key of the last vertex.
    #[must_use]
    pub fn last_key(&self) -> Option<VertexKey> {
        self.head.map(|head| self.nodes[head].prev)
    }

    /// The first vertex.
    #[must_use]
    pub fn first(&self) -> Option<Point2> {
        self.first_key().map(|key| self.nodes[key].point)
    }

    /// The last vertex.
    #[must_use]
    pub fn last(&self) -> Option<Point2> {
        self.last_key().map(|key| self.nodes[key].point)
    }

    /// Moves the first vertex to the back. The cyclic order is unchanged.
    pub fn rotate(&mut self) {
        if let Some(head) = self.head {
            self.head = Some(self.nodes[head].next);
        }
    }

    /// Position of vertex `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not in the ring.
    #[must_use]
    pub fn point(&self, key: VertexKey) -> Point2 {
        self.nodes[key].point
    }

    /// Key of the vertex following `key` in cyclic order.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not in the ring.
    #[must_use]
    pub fn next(&self, key: VertexKey) -> VertexKey {
        self.nodes[key].next
    }

    /// Key of the vertex preceding `key` in cyclic order.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not in the ring.
    #[must_use]
    pub fn prev(&self, key: VertexKey) -> VertexKey {
        self.nodes[key].prev
    }

    /// Keys in cyclic order, starting at the first vertex.
    pub fn keys(&self) -> impl Iterator<Item = VertexKey> + '_ {
        let mut cursor = self.head;
        (0..self.len()).filter_map(move |_| {
            let key = cursor?;
            cursor = Some(self.nodes[key].next);
            Some(key)
        })
    }

    /// Points in cyclic order, starting at the first vertex.
    pub fn iter(&self) -> impl Iterator<Item = Point2> + '_ {
        self.keys().map(|key| self.nodes[key].point)
    }

    fn link_before_head(&mut self, point: Point2) -> VertexKey {
        let Some(head) = self.head else {
            let key = self.nodes.insert_with_key(|key| Node {
                point,
                prev: key,
                next: key,
            });
            self.head = Some(key);
            return key;
        };
        let tail = self.nodes[head].prev;
        let key = self.nodes.insert(Node {
            point,
            prev: tail,
            next: head,
        });
        self.nodes[tail].next = key;
        self.nodes[head].prev = key;
        key
    }

    fn unlink(&mut self, key: VertexKey) -> Point2 {
        let node = self
            .nodes
            .remove(key)
            .unwrap_or_else(|| unreachable!("vertex key not in ring"));
        if node.next == key {
            self.head = None;
        } else {
            self.nodes[node.prev].next = node.next;
            self.nodes[node.next].prev = node.prev;
            if self.head == Some(key) {
                self.head = Some(node.next);
            }
        }
        node.point
    }
}
