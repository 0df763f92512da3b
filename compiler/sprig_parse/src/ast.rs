//! Syntax tree.

use sprig_lexer::Span;

/// An expression with its source range.
#[derive(Clone, Debug, PartialEq)]
pub struct SpannedExpr {
    pub expr: Expr,
    pub span: Span,
}

impl SpannedExpr {
    pub fn new(expr: Expr, span: Span) -> Self {
        SpannedExpr { expr, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Int(i64),
    Float(f64),
    Str(String),
    /// `@name`: the name itself, as a string.
    Symbol(String),
    /// `name`: the value bound to `name`.
    Lookup(String),
    /// `name(args)`, or `@name(args)` when `deferred`.
    ///
    /// A deferred call evaluates to a block that performs the call when
    /// invoked.
    Call {
        target: String,
        args: Vec<SpannedExpr>,
        deferred: bool,
    },
    /// `{ ... }`: evaluates to a block, not to its contents.
    Block(Vec<SpannedExpr>),
}

/// A whole source file: a sequence of expressions.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Program {
    pub body: Vec<SpannedExpr>,
}

impl Program {
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Number of expression nodes, nested ones included.
    pub fn node_count(&self) -> usize {
        let mut pending: Vec<&SpannedExpr> = self.body.iter().collect();
        let mut count = 0;
        while let Some(expr) = pending.pop() {
            count += 1;
            match &expr.expr {
                Expr::Call { args, .. } => pending.extend(args),
                Expr::Block(body) => pending.extend(body),
                _ => {}
            }
        }
        count
    }
}
