//! AST (Abstract Syntax Tree) definitions for arithmetic expressions

use crate::parser::lexer::TokenKind;
use std::fmt;

/// Pre-order index of a node within its tree (the root is 0).
///
/// Ids are derived from the tree shape rather than stored in the nodes, so
/// two trees with the same structure always agree on them.
pub type NodeId = usize;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// 1-based character column in the input line
    pub column: usize,
}

impl SourceLocation {
    pub fn new(column: usize) -> Self {
        Self { column }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }

    /// Map an operator token kind to its operator, if it is one.
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Minus => Some(BinOp::Sub),
            TokenKind::Multiply => Some(BinOp::Mul),
            TokenKind::Divide => Some(BinOp::Div),
            _ => None,
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Expression tree. Every internal node is a `BinaryOp` that exclusively owns
/// its two children; every leaf is a `Number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number {
        value: i64,
    },
    BinaryOp {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

/// One rendered line of the tree view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeLine {
    pub id: NodeId,
    pub depth: usize,
    pub label: String,
}

impl Expr {
    pub fn number(value: i64) -> Self {
        Expr::Number { value }
    }

    pub fn binary(op: BinOp, left: Expr, right: Expr) -> Self {
        Expr::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Total number of nodes in the tree
    pub fn node_count(&self) -> usize {
        match self {
            Expr::Number { .. } => 1,
            Expr::BinaryOp { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Height of the tree; a single number has depth 1
    pub fn depth(&self) -> usize {
        match self {
            Expr::Number { .. } => 1,
            Expr::BinaryOp { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Label used by the tree view for this node alone
    pub fn label(&self) -> String {
        match self {
            Expr::Number { value } => format!("Number: {}", value),
            Expr::BinaryOp { op, .. } => format!("BinaryOp: {}", op),
        }
    }

    /// Flatten the tree into pre-order lines. The position of a line in the
    /// returned vector equals its [`NodeId`].
    pub fn tree_lines(&self) -> Vec<TreeLine> {
        let mut lines = Vec::with_capacity(self.node_count());
        self.collect_lines(0, &mut lines);
        lines
    }

    fn collect_lines(&self, depth: usize, lines: &mut Vec<TreeLine>) {
        lines.push(TreeLine {
            id: lines.len(),
            depth,
            label: self.label(),
        });
        if let Expr::BinaryOp { left, right, .. } = self {
            left.collect_lines(depth + 1, lines);
            right.collect_lines(depth + 1, lines);
        }
    }

    /// Render as an indented tree: the operator line, then the left and right
    /// children one level deeper. Informational only.
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        for line in self.tree_lines() {
            out.push_str(&"  ".repeat(line.depth));
            out.push_str(&line.label);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number { value } => write!(f, "{}", value),
            Expr::BinaryOp { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expr {
        // (1 + 2) * 3
        Expr::binary(
            BinOp::Mul,
            Expr::binary(BinOp::Add, Expr::number(1), Expr::number(2)),
            Expr::number(3),
        )
    }

    #[test]
    fn test_render_tree_indents_children() {
        let expected = "BinaryOp: *\n  BinaryOp: +\n    Number: 1\n    Number: 2\n  Number: 3\n";
        assert_eq!(sample().render_tree(), expected);
    }

    #[test]
    fn test_tree_lines_are_preorder() {
        let lines = sample().tree_lines();
        let ids: Vec<NodeId> = lines.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);
        assert_eq!(lines[4].label, "Number: 3");
        assert_eq!(lines[4].depth, 1);
    }

    #[test]
    fn test_counts() {
        let tree = sample();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);
        assert_eq!(Expr::number(7).depth(), 1);
    }

    #[test]
    fn test_display_is_fully_parenthesized() {
        assert_eq!(sample().to_string(), "((1 + 2) * 3)");
    }

    #[test]
    fn test_binop_from_token_kind() {
        assert_eq!(BinOp::from_token_kind(TokenKind::Divide), Some(BinOp::Div));
        assert_eq!(BinOp::from_token_kind(TokenKind::OpenParen), None);
    }
}
