use super::{GrammarAtom, GroupNode, RuleNode};
use crate::GrammarError;

fn is_pipe<TSym>(node: &GroupNode<TSym>) -> bool {
    matches!(node, GroupNode::Atom(GrammarAtom::Operator('|')))
}

/// Lower a group tree into the canonical rule tree.
///
/// A group holding a top level `|` becomes an [Alt](RuleNode::Alt) of its
/// lowered segments, where empty segments lower to [Empty](RuleNode::Empty).
/// Any other group lowers left to right into a sequence, binding postfix
/// quantifiers to the directly preceding node; a single element sequence
/// collapses into the element.
pub(crate) fn lower<TSym>(group: Vec<GroupNode<TSym>>) -> Result<RuleNode<TSym>, GrammarError> {
    if group.is_empty() {
        return Ok(RuleNode::Empty);
    }
    if group.iter().any(is_pipe) {
        let mut segments: Vec<RuleNode<TSym>> = Vec::new();
        let mut current: Vec<GroupNode<TSym>> = Vec::new();
        for node in group {
            if is_pipe(&node) {
                segments.push(lower(std::mem::take(&mut current))?);
            } else {
                current.push(node);
            }
        }
        segments.push(lower(current)?);
        return Ok(RuleNode::Alt(segments));
    }
    let mut nodes: Vec<RuleNode<TSym>> = Vec::new();
    for node in group {
        match node {
            GroupNode::Atom(GrammarAtom::Symbol(sym)) => nodes.push(RuleNode::Ref(sym)),
            GroupNode::Atom(GrammarAtom::Ident(name)) => {
                return Err(GrammarError::UnresolvedReference(name));
            }
            GroupNode::Atom(GrammarAtom::Operator(op @ ('+' | '*' | '?'))) => {
                let child = match nodes.pop() {
                    Some(child) => Box::new(child),
                    None => return Err(GrammarError::DanglingOperator(op)),
                };
                nodes.push(match op {
                    '+' => RuleNode::More(child),
                    '*' => RuleNode::Repeat(child),
                    _ => RuleNode::Opt(child),
                });
            }
            GroupNode::Atom(GrammarAtom::Operator(op)) => {
                return Err(GrammarError::DanglingOperator(op));
            }
            GroupNode::Group(children) => nodes.push(lower(children)?),
        }
    }
    if nodes.len() == 1 {
        Ok(nodes.remove(0))
    } else {
        Ok(RuleNode::Seq(nodes))
    }
}
