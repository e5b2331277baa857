use super::group::build_groups;
use super::lowering::lower;
use super::resolver::resolve;
use super::tokenizer::tokenize_grammar;
use super::{GrammarAtom, RuleNode, RulePart};
use crate::GrammarError;
use ptree::TreeItem;
use std::borrow::Cow;
use std::fmt::{Debug, Display, Formatter};

impl<TSym: Clone> RuleNode<TSym> {
    /// Compile grammar notation into a rule tree.
    ///
    /// Identifier tokens matching a key of `symbols` become
    /// [Ref](RuleNode::Ref) leaves; an identifier matching no key is a
    /// [GrammarError::UnresolvedReference].
    ///
    /// # Example
    /// ```
    /// use lexigram::grammar::RuleNode;
    ///
    /// let rule = RuleNode::compile("a (b a)*", &[("a", 0), ("b", 1)]).unwrap();
    /// assert_eq!(
    ///     rule,
    ///     RuleNode::Seq(vec![
    ///         RuleNode::Ref(0),
    ///         RuleNode::Repeat(Box::new(RuleNode::Seq(vec![
    ///             RuleNode::Ref(1),
    ///             RuleNode::Ref(0),
    ///         ]))),
    ///     ])
    /// );
    /// ```
    pub fn compile(grammar: &str, symbols: &[(&str, TSym)]) -> Result<Self, GrammarError> {
        let atoms = resolve(tokenize_grammar(grammar), symbols);
        lower(build_groups(atoms)?)
    }
}

impl<TSym> RuleNode<TSym> {
    /// Compile an interleaved sequence of grammar fragments and already
    /// resolved symbols, as produced by a grammar template style declaration.
    ///
    /// # Example
    /// ```
    /// use lexigram::grammar::{RuleNode, RulePart};
    ///
    /// let rule = RuleNode::compile_parts(vec![
    ///     RulePart::Src("("),
    ///     RulePart::Sym("a"),
    ///     RulePart::Src("|"),
    ///     RulePart::Sym("b"),
    ///     RulePart::Src(")+"),
    /// ])
    /// .unwrap();
    /// assert_eq!(format!("{}", rule), "(a | b)+");
    /// ```
    pub fn compile_parts(parts: Vec<RulePart<TSym>>) -> Result<Self, GrammarError> {
        let mut atoms: Vec<GrammarAtom<TSym>> = Vec::new();
        for part in parts {
            match part {
                RulePart::Src(src) => atoms.extend(tokenize_grammar(src)),
                RulePart::Sym(sym) => atoms.push(GrammarAtom::Symbol(sym)),
            }
        }
        lower(build_groups(atoms)?)
    }

    /// Visit self and every descendant node, depth first.
    pub fn walk<'this, TF: FnMut(&'this RuleNode<TSym>)>(&'this self, f: &mut TF) {
        f(self);
        match self {
            RuleNode::Seq(children) | RuleNode::Alt(children) => {
                children.iter().for_each(|child| child.walk(f))
            }
            RuleNode::More(child) | RuleNode::Repeat(child) | RuleNode::Opt(child) => child.walk(f),
            RuleNode::Ref(_) | RuleNode::Empty => {}
        }
    }
}

impl<TSym: Eq> RuleNode<TSym> {
    /// Whether any [Ref](RuleNode::Ref) leaf points at `sym`.
    pub fn contains_ref(&self, sym: &TSym) -> bool {
        let mut found = false;
        self.walk(&mut |node| {
            if let RuleNode::Ref(s) = node {
                if s == sym {
                    found = true;
                }
            }
        });
        found
    }
}

fn write_alternative<TSym: Display>(
    node: &RuleNode<TSym>,
    f: &mut Formatter<'_>,
) -> std::fmt::Result {
    match node {
        RuleNode::Alt(_) => write!(f, "({})", node),
        _ => write!(f, "{}", node),
    }
}

fn write_term<TSym: Display>(node: &RuleNode<TSym>, f: &mut Formatter<'_>) -> std::fmt::Result {
    match node {
        RuleNode::Alt(_) | RuleNode::Empty => write!(f, "({})", node),
        _ => write!(f, "{}", node),
    }
}

fn write_atom<TSym: Display>(node: &RuleNode<TSym>, f: &mut Formatter<'_>) -> std::fmt::Result {
    match node {
        RuleNode::Alt(_) | RuleNode::Seq(_) | RuleNode::Empty => write!(f, "({})", node),
        _ => write!(f, "{}", node),
    }
}

/// The canonical notation of the rule: single spaces between tokens and
/// parentheses only where the structure demands them. Lowering the printed
/// form reproduces the tree.
impl<TSym: Display> Display for RuleNode<TSym> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleNode::Ref(sym) => write!(f, "{}", sym),
            RuleNode::Seq(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write_term(child, f)?;
                }
                Ok(())
            }
            RuleNode::Alt(children) => {
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write_alternative(child, f)?;
                }
                Ok(())
            }
            RuleNode::More(child) => {
                write_atom(child, f)?;
                write!(f, "+")
            }
            RuleNode::Repeat(child) => {
                write_atom(child, f)?;
                write!(f, "*")
            }
            RuleNode::Opt(child) => {
                write_atom(child, f)?;
                write!(f, "?")
            }
            RuleNode::Empty => Ok(()),
        }
    }
}

impl<TSym: Debug + Clone> TreeItem for RuleNode<TSym> {
    type Child = Self;

    fn write_self<W: std::io::Write>(&self, f: &mut W, _: &ptree::Style) -> std::io::Result<()> {
        match self {
            RuleNode::Ref(sym) => write!(f, "Ref {:?}", sym),
            RuleNode::Seq(_) => write!(f, "Seq"),
            RuleNode::Alt(_) => write!(f, "Alt"),
            RuleNode::More(_) => write!(f, "More"),
            RuleNode::Repeat(_) => write!(f, "Repeat"),
            RuleNode::Opt(_) => write!(f, "Opt"),
            RuleNode::Empty => write!(f, "Empty"),
        }
    }

    fn children(&self) -> Cow<[Self::Child]> {
        match self {
            RuleNode::Seq(children) | RuleNode::Alt(children) => Cow::from(children),
            RuleNode::More(child) | RuleNode::Repeat(child) | RuleNode::Opt(child) => {
                Cow::from(vec![(**child).clone()])
            }
            RuleNode::Ref(_) | RuleNode::Empty => Cow::Borrowed(&[]),
        }
    }
}

impl<TSym: Debug + Clone> RuleNode<TSym> {
    /// Render the rule tree to standard output.
    pub fn print(&self) -> Result<(), std::io::Error> {
        ptree::print_tree(self)
    }
}
