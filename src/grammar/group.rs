use super::{GrammarAtom, GroupNode};
use crate::GrammarError;

/// Assemble a parenthesis balanced atom stream into a nested group tree.
pub(crate) fn build_groups<TSym>(
    atoms: Vec<GrammarAtom<TSym>>,
) -> Result<Vec<GroupNode<TSym>>, GrammarError> {
    let mut stack: Vec<Vec<GroupNode<TSym>>> = vec![Vec::new()];
    for atom in atoms {
        match atom {
            GrammarAtom::Operator('(') => stack.push(Vec::new()),
            GrammarAtom::Operator(')') => {
                let group = match stack.pop() {
                    Some(group) => group,
                    None => return Err(GrammarError::UnbalancedParenthesis),
                };
                match stack.last_mut() {
                    Some(parent) => parent.push(GroupNode::Group(group)),
                    None => return Err(GrammarError::UnbalancedParenthesis),
                }
            }
            other => match stack.last_mut() {
                Some(top) => top.push(GroupNode::Atom(other)),
                None => return Err(GrammarError::UnbalancedParenthesis),
            },
        }
    }
    if stack.len() == 1 {
        Ok(stack.remove(0))
    } else {
        Err(GrammarError::UnbalancedParenthesis)
    }
}
