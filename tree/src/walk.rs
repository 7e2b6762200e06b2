//! Tree traversal over [`IntentNode::children`].

use crate::IntentNode;
use intent_core::NodeId;

/// `node` and all its descendants, pre-order.
pub fn descendants(node: &dyn IntentNode) -> Vec<&dyn IntentNode> {
    let mut out = Vec::new();
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        out.push(current);
        let children = current.children();
        stack.extend(children.into_iter().rev());
    }
    out
}

/// The node with identity `id` in the subtree rooted at `node`.
pub fn find_node(node: &dyn IntentNode, id: NodeId) -> Option<&dyn IntentNode> {
    descendants(node)
        .into_iter()
        .find(|candidate| candidate.base().id() == id)
}
