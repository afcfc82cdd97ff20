use crate::Shape;

/// Errors returned when building containers from dynamically sized data.
///
/// Shape mismatches between statically sized operands are rejected at compile time, so this type
/// only shows up at the boundary to runtime-sized data such as slices.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("cannot build a {shape} from {found} elements (expected {expected})")]
    ElementCount {
        shape: Shape,
        expected: usize,
        found: usize,
    },
    #[error("incompatible operand shapes: {lhs} and {rhs}")]
    Incompatible { lhs: Shape, rhs: Shape },
}
