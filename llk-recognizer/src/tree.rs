use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use llk_symbol::{Symbol, SymbolSource};

use crate::action::Action;
use crate::observer::Observer;
use crate::parser::Parser;

/// One node of a recognized parse tree.
///
/// `rule` is `None` for a leaf (a terminal, or a non-terminal the
/// recognizer never got to expand because it errored first) and `Some(n)`
/// once `n`'s right-hand side has become this node's children.
pub struct TreeNode {
    pub symbol: Symbol,
    pub rule: Option<usize>,
    pub children: Vec<Rc<RefCell<TreeNode>>>,
}

impl TreeNode {
    fn leaf(symbol: Symbol) -> Rc<RefCell<TreeNode>> {
        Rc::new(RefCell::new(TreeNode {
            symbol,
            rule: None,
            children: Vec::new(),
        }))
    }
}

/// An [`Observer`] that mirrors the recognizer's stack with a tree-node
/// stack of the same shape: a `Pop` pops a leaf, an `Expand` replaces the
/// popped node's slot with its rule's children (also pushed, right-to-left,
/// so the tree stack's top always names the same symbol as the parser
/// stack's top).
pub struct TreeBuilder {
    tree_stack: Vec<Rc<RefCell<TreeNode>>>,
    root: Option<Rc<RefCell<TreeNode>>>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder {
            tree_stack: Vec::new(),
            root: None,
        }
    }

    /// The finished tree's root, once recognition has produced one. `None`
    /// before `on_start` has run.
    pub fn root(&self) -> Option<Rc<RefCell<TreeNode>>> {
        self.root.clone()
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for TreeBuilder {
    fn on_start(&mut self, parser: &Parser) {
        let grammar = parser.grammar();
        for _ in 0..parser.k() {
            self.tree_stack.push(TreeNode::leaf(grammar.dollar()));
        }
        let root = TreeNode::leaf(grammar.top());
        self.tree_stack.push(root.clone());
        self.root = Some(root);
    }

    fn on_next(&mut self, parser: &Parser) {
        match parser.action() {
            Action::Pop(_) => {
                self.tree_stack.pop();
            }
            Action::Expand(rule) => {
                let node = self
                    .tree_stack
                    .pop()
                    .expect("tree stack empty on Expand");
                node.borrow_mut().rule = Some(rule);
                let rhs = parser.grammar().rule(rule).rhs.clone();
                for sym in rhs.as_slice().iter().rev().copied() {
                    let child = TreeNode::leaf(sym);
                    self.tree_stack.push(child.clone());
                    node.borrow_mut().children.insert(0, child);
                }
            }
            Action::Init | Action::Accept | Action::Error => {}
        }
    }
}

/// Renders a tree with two-space indentation per depth, one node per line,
/// `(n)` suffixed for internal nodes.
pub fn render_indented(root: &Rc<RefCell<TreeNode>>, source: &SymbolSource) -> String {
    let mut out = String::new();
    write_indented(root, 0, source, &mut out);
    out
}

fn write_indented(node: &Rc<RefCell<TreeNode>>, depth: usize, source: &SymbolSource, out: &mut String) {
    let node = node.borrow();
    out.push_str(&"  ".repeat(depth));
    out.push_str(&source.name_of(node.symbol));
    if let Some(rule) = node.rule {
        out.push_str(&format!(" ({rule})"));
    }
    out.push('\n');
    for child in &node.children {
        write_indented(child, depth + 1, source, out);
    }
}

/// Renders a tree as a Graphviz `digraph`: one node per tree node, labeled
/// with its symbol's name, and one edge per parent/child pair. The edge
/// into an internal node's middle child additionally carries `(n)`, naming
/// the rule that produced the whole run of children.
pub fn render_dot(root: &Rc<RefCell<TreeNode>>, source: &SymbolSource) -> String {
    let mut out = String::from("digraph parse_tree {\n  node [ordering=\"out\"];\n");
    let mut ids: HashMap<*const RefCell<TreeNode>, usize> = HashMap::new();
    let mut next_id = 0usize;
    write_dot(root, source, &mut ids, &mut next_id, &mut out);
    out.push_str("}\n");
    out
}

fn node_id(
    node: &Rc<RefCell<TreeNode>>,
    ids: &mut HashMap<*const RefCell<TreeNode>, usize>,
    next_id: &mut usize,
) -> usize {
    let ptr = Rc::as_ptr(node);
    *ids.entry(ptr).or_insert_with(|| {
        let id = *next_id;
        *next_id += 1;
        id
    })
}

fn write_dot(
    node: &Rc<RefCell<TreeNode>>,
    source: &SymbolSource,
    ids: &mut HashMap<*const RefCell<TreeNode>, usize>,
    next_id: &mut usize,
    out: &mut String,
) {
    let id = node_id(node, ids, next_id);
    let (label, rule, children) = {
        let n = node.borrow();
        (source.name_of(n.symbol).into_owned(), n.rule, n.children.clone())
    };
    out.push_str(&format!("  n{id} [label=\"{}\"];\n", escape(&label)));

    let middle = children.len() / 2;
    for (i, child) in children.iter().enumerate() {
        let child_id = node_id(child, ids, next_id);
        if i == middle {
            if let Some(rule) = rule {
                out.push_str(&format!("  n{id} -> n{child_id} [label=\"({rule})\"];\n"));
            } else {
                out.push_str(&format!("  n{id} -> n{child_id};\n"));
            }
        } else {
            out.push_str(&format!("  n{id} -> n{child_id};\n"));
        }
    }
    for child in &children {
        write_dot(child, source, ids, next_id, out);
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
