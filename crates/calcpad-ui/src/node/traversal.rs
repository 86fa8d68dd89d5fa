//! Depth-first queries over the view tree.

use super::Node;
use crate::tap::TapAction;

impl Node {
    pub fn button_count(&self) -> usize {
        let own = usize::from(matches!(self, Node::Button { .. }));
        own + self.children().iter().map(Node::button_count).sum::<usize>()
    }

    /// Collect every button action in depth-first order.
    pub fn collect_actions(&self) -> Vec<TapAction> {
        let mut actions = Vec::new();
        self.collect_actions_into(&mut actions);
        actions
    }

    fn collect_actions_into(&self, out: &mut Vec<TapAction>) {
        if let Node::Button { action, .. } = self {
            out.push(*action);
        }
        for child in self.children() {
            child.collect_actions_into(out);
        }
    }

    /// Find the first button whose action label matches (case-insensitive).
    pub fn find_action(&self, label: &str) -> Option<TapAction> {
        self.collect_actions()
            .into_iter()
            .find(|a| a.label().eq_ignore_ascii_case(label.trim()))
    }

    /// Number of levels, counting this node as 1.
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(Node::depth).max().unwrap_or(0)
    }
}
