use super::node::Node;

/// Evaluates the tree at `x`.
///
/// Never fails. Division by zero, logs of negatives and the like come back
/// as NaN or infinity.
pub fn evaluate(node: &Node, x: f64) -> f64 {
    match node {
        Node::Constant(value) => *value,
        Node::Variable => x,
        Node::Unary(function, arg) => function.apply(evaluate(arg, x)),
        Node::Binary(op, left, right) => op.apply(evaluate(left, x), evaluate(right, x)),
    }
}
