use crate::force::LayoutStats;

/// A layout engine that can compute positions for graph nodes
///
/// This trait is generic over the graph type `G`, so an engine states which
/// graph capabilities it needs:
/// - [`ForceLayout`](crate::ForceLayout) implements `LayoutEngine<G>` for any
///   `G: LayoutGraph`
/// - Other engines can specify their own graph requirements
///
/// Positions are written back into the graph's nodes.
pub trait LayoutEngine<G> {
    /// Run the layout to completion on `graph`
    fn layout(&self, graph: &mut G) -> LayoutStats;
}
