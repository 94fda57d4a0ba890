// Abstract Syntax Tree (AST) definitions for the Beer language.
// A tree is a closed sum of literal and binary nodes; every node owns its
// children and remembers the source span it was parsed from.

use std::fmt;

use beer_lexer::Span;

/// A value paired with the source range it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Spanned<'src, T> {
    pub node: T,
    pub span: Span<'src>,
}

impl<'src, T> Spanned<'src, T> {
    pub fn new(node: T, span: Span<'src>) -> Self {
        Self { node, span }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Spanned<'src, U> {
        Spanned {
            node: f(self.node),
            span: self.span,
        }
    }
}

/// An expression tree.
///
/// Flat operator chains build trees as deep as the chain is long, so every
/// whole-tree walk here (drop, clone, comparison, display, span, counts) keeps
/// its pending nodes on a heap stack instead of recursing.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ExpressionNode<'src> {
    Literal(Spanned<'src, LiteralNode>),
    Binary(Box<BinaryExpressionNode<'src>>),
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LiteralNode {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BinaryExpressionNode<'src> {
    pub left: ExpressionNode<'src>,
    pub operator: Spanned<'src, BinaryOperator>,
    pub right: ExpressionNode<'src>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BinaryOperator {
    Add,
    Sub,
    Mul,
    Div,
}

impl<'src> ExpressionNode<'src> {
    pub fn literal(node: LiteralNode, span: Span<'src>) -> Self {
        ExpressionNode::Literal(Spanned::new(node, span))
    }

    pub fn binary(
        left: ExpressionNode<'src>,
        operator: Spanned<'src, BinaryOperator>,
        right: ExpressionNode<'src>,
    ) -> Self {
        ExpressionNode::Binary(Box::new(BinaryExpressionNode {
            left,
            operator,
            right,
        }))
    }

    /// The source range from the left-most to the right-most token of this node
    pub fn span(&self) -> Span<'src> {
        let mut node = self;
        let first = loop {
            match node {
                ExpressionNode::Literal(lit) => break lit.span,
                ExpressionNode::Binary(bin) => node = &bin.left,
            }
        };
        let mut node = self;
        let last = loop {
            match node {
                ExpressionNode::Literal(lit) => break lit.span,
                ExpressionNode::Binary(bin) => node = &bin.right,
            }
        };
        first.to(&last)
    }

    /// Number of nodes in the tree
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let ExpressionNode::Binary(bin) = node {
                stack.push(&bin.left);
                stack.push(&bin.right);
            }
        }
        count
    }

    /// Length of the longest root-to-leaf path, a lone literal being 1
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, level)) = stack.pop() {
            deepest = deepest.max(level);
            if let ExpressionNode::Binary(bin) = node {
                stack.push((&bin.left, level + 1));
                stack.push((&bin.right, level + 1));
            }
        }
        deepest
    }

    // Cheap stand-in left behind when a child is moved out during drop
    fn placeholder() -> Self {
        ExpressionNode::Literal(Spanned::new(LiteralNode::Int(0), Span::default()))
    }
}

impl Drop for ExpressionNode<'_> {
    fn drop(&mut self) {
        let ExpressionNode::Binary(bin) = self else {
            return;
        };
        let mut stack = vec![
            std::mem::replace(&mut bin.left, ExpressionNode::placeholder()),
            std::mem::replace(&mut bin.right, ExpressionNode::placeholder()),
        ];
        // Each popped node has its children detached first, so its own drop
        // returns at once
        while let Some(mut node) = stack.pop() {
            if let ExpressionNode::Binary(bin) = &mut node {
                stack.push(std::mem::replace(&mut bin.left, ExpressionNode::placeholder()));
                stack.push(std::mem::replace(&mut bin.right, ExpressionNode::placeholder()));
            }
        }
    }
}

impl Clone for ExpressionNode<'_> {
    fn clone(&self) -> Self {
        enum Step<'n, 'src> {
            Visit(&'n ExpressionNode<'src>),
            Join(Spanned<'src, BinaryOperator>),
        }

        let mut steps = vec![Step::Visit(self)];
        let mut built: Vec<ExpressionNode<'_>> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(ExpressionNode::Literal(lit)) => built.push(ExpressionNode::Literal(*lit)),
                Step::Visit(ExpressionNode::Binary(bin)) => {
                    steps.push(Step::Join(bin.operator));
                    steps.push(Step::Visit(&bin.right));
                    steps.push(Step::Visit(&bin.left));
                }
                Step::Join(operator) => {
                    let right = built.pop().unwrap_or_else(ExpressionNode::placeholder);
                    let left = built.pop().unwrap_or_else(ExpressionNode::placeholder);
                    built.push(ExpressionNode::binary(left, operator, right));
                }
            }
        }
        built.pop().unwrap_or_else(ExpressionNode::placeholder)
    }
}

impl PartialEq for ExpressionNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        let mut pairs = vec![(self, other)];
        while let Some(pair) = pairs.pop() {
            match pair {
                (ExpressionNode::Literal(a), ExpressionNode::Literal(b)) => {
                    if a != b {
                        return false;
                    }
                }
                (ExpressionNode::Binary(a), ExpressionNode::Binary(b)) => {
                    if a.operator != b.operator {
                        return false;
                    }
                    pairs.push((&a.left, &b.left));
                    pairs.push((&a.right, &b.right));
                }
                _ => return false,
            }
        }
        true
    }
}

impl BinaryOperator {
    /// Operators of a higher tier bind tighter
    pub fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Sub => 1,
            BinaryOperator::Mul | BinaryOperator::Div => 2,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Sub => '-',
            BinaryOperator::Mul => '*',
            BinaryOperator::Div => '/',
        }
    }
}

impl fmt::Display for LiteralNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralNode::Int(n) => write!(f, "INT:{n}"),
            LiteralNode::Float(x) => write!(f, "FLOAT:{x:?}"),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryOperator::Add => "PLUS",
            BinaryOperator::Sub => "MINUS",
            BinaryOperator::Mul => "MUL",
            BinaryOperator::Div => "DIV",
        })
    }
}

impl fmt::Display for ExpressionNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'n, 'src> {
            Node(&'n ExpressionNode<'src>),
            Operator(BinaryOperator),
            Text(&'static str),
        }

        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(ExpressionNode::Literal(lit)) => write!(f, "{}", lit.node)?,
                Piece::Node(ExpressionNode::Binary(bin)) => {
                    f.write_str("(")?;
                    pending.push(Piece::Text(")"));
                    pending.push(Piece::Node(&bin.right));
                    pending.push(Piece::Text(", "));
                    pending.push(Piece::Operator(bin.operator.node));
                    pending.push(Piece::Text(", "));
                    pending.push(Piece::Node(&bin.left));
                }
                Piece::Operator(op) => write!(f, "{op}")?,
                Piece::Text(text) => f.write_str(text)?,
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ExpressionNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExpressionNode({self} @ {})", self.span())
    }
}
