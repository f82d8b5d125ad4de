//! Owned scene-graph nodes.
//!
//! A [`Node`] owns its children outright: a child belongs to exactly one
//! parent, and detaching (for example with
//! [`remove_all_children`](Node::remove_all_children)) hands ownership back
//! to the caller.  Children never reference their ancestors.
//!
//! The type parameter `B` is the *binding* carried by hit regions: the value
//! a hit test reports when a touch lands inside the region.

use crate::geometry::{Bounds, Size, Vec2};
use crate::label::Label;
use crate::shape::DrawList;

/// An invisible, precisely sized input-capture area.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion<B> {
    pub size: Size,
    pub binding: B,
}

/// What a node contributes by itself, independent of its children.
#[derive(Debug, Clone)]
pub enum NodeKind<B> {
    /// A pure container.
    Group,
    Label(Label),
    Draw(DrawList),
    HitRegion(HitRegion<B>),
}

/// A node in the scene tree.
#[derive(Debug, Clone)]
pub struct Node<B = ()> {
    position: Vec2,
    order: i32,
    visible: bool,
    kind: NodeKind<B>,
    children: Vec<Node<B>>,
}

impl<B> Node<B> {
    fn with_kind(kind: NodeKind<B>) -> Self {
        Self {
            position: Vec2::ZERO,
            order: 0,
            visible: true,
            kind,
            children: Vec::new(),
        }
    }

    pub fn group() -> Self {
        Self::with_kind(NodeKind::Group)
    }

    pub fn label(label: Label) -> Self {
        Self::with_kind(NodeKind::Label(label))
    }

    pub fn draw(list: DrawList) -> Self {
        Self::with_kind(NodeKind::Draw(list))
    }

    /// A hit region of `size`, anchored at its bottom-left corner.
    pub fn hit_region(size: Size, binding: B) -> Self {
        Self::with_kind(NodeKind::HitRegion(HitRegion { size, binding }))
    }

    pub fn with_position(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Paint order among siblings; higher paints later (in front).
    pub fn order(&self) -> i32 {
        self.order
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn kind(&self) -> &NodeKind<B> {
        &self.kind
    }

    pub fn as_label(&self) -> Option<&Label> {
        match &self.kind {
            NodeKind::Label(label) => Some(label),
            _ => None,
        }
    }

    pub fn as_draw(&self) -> Option<&DrawList> {
        match &self.kind {
            NodeKind::Draw(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_hit_region(&self) -> Option<&HitRegion<B>> {
        match &self.kind {
            NodeKind::HitRegion(region) => Some(region),
            _ => None,
        }
    }

    /// Append a child at paint order 0.
    pub fn add_child(&mut self, child: Node<B>) {
        self.add_child_ordered(child, 0);
    }

    /// Append a child at the given paint order.
    ///
    /// Siblings stay sorted by order; among equal orders, insertion order is
    /// kept, so later children paint in front.
    pub fn add_child_ordered(&mut self, mut child: Node<B>, order: i32) {
        child.order = order;
        let index = self.children.partition_point(|c| c.order <= order);
        self.children.insert(index, child);
    }

    /// Detach every child, returning them in paint order.
    pub fn remove_all_children(&mut self) -> Vec<Node<B>> {
        std::mem::take(&mut self.children)
    }

    /// Children in paint order, back to front.
    pub fn children(&self) -> &[Node<B>] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Bindings of every visible hit region under `point`, front-most first.
    ///
    /// `point` is expressed in this node's parent space.
    pub fn hits(&self, point: Vec2) -> Vec<&B> {
        let mut out = Vec::new();
        self.collect_hits(point, &mut out);
        out
    }

    fn collect_hits<'a>(&'a self, point: Vec2, out: &mut Vec<&'a B>) {
        if !self.visible {
            return;
        }
        let local = point - self.position;
        for child in self.children.iter().rev() {
            child.collect_hits(local, out);
        }
        if let NodeKind::HitRegion(region) = &self.kind {
            if Bounds::from_size(region.size).contains(local) {
                out.push(&region.binding);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x: f32, y: f32, binding: u32) -> Node<u32> {
        Node::hit_region(Size::new(4.0, 2.0), binding).with_position(Vec2::new(x, y))
    }

    #[test]
    fn children_sorted_by_order_then_insertion() {
        let mut root: Node<u32> = Node::group();
        root.add_child_ordered(region(0.0, 0.0, 1), 2);
        root.add_child_ordered(region(0.0, 0.0, 2), 1);
        root.add_child_ordered(region(0.0, 0.0, 3), 2);
        root.add_child(region(0.0, 0.0, 4));

        let bindings: Vec<u32> = root
            .children()
            .iter()
            .map(|c| c.as_hit_region().unwrap().binding)
            .collect();
        assert_eq!(bindings, vec![4, 2, 1, 3]);
    }

    #[test]
    fn remove_all_children_detaches() {
        let mut root: Node<u32> = Node::group();
        root.add_child(region(0.0, 0.0, 1));
        root.add_child(region(0.0, 0.0, 2));
        let detached = root.remove_all_children();
        assert_eq!(detached.len(), 2);
        assert_eq!(root.child_count(), 0);
        assert!(root.remove_all_children().is_empty());
    }

    #[test]
    fn hits_use_accumulated_positions() {
        let mut layer: Node<u32> = Node::group().with_position(Vec2::new(10.0, 10.0));
        layer.add_child(region(1.0, 1.0, 7));

        assert_eq!(layer.hits(Vec2::new(11.5, 11.5)), vec![&7]);
        assert!(layer.hits(Vec2::new(1.5, 1.5)).is_empty());
        assert!(layer.hits(Vec2::new(15.0, 11.5)).is_empty());
    }

    #[test]
    fn hits_are_front_most_first() {
        let mut root: Node<u32> = Node::group();
        root.add_child_ordered(region(0.0, 0.0, 1), 1);
        root.add_child_ordered(region(0.0, 0.0, 2), 2);
        assert_eq!(root.hits(Vec2::new(1.0, 1.0)), vec![&2, &1]);
    }

    #[test]
    fn hidden_nodes_do_not_hit() {
        let mut root: Node<u32> = Node::group();
        let mut hidden = region(0.0, 0.0, 1);
        hidden.set_visible(false);
        root.add_child(hidden);
        assert!(root.hits(Vec2::new(1.0, 1.0)).is_empty());
    }
}
