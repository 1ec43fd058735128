mod descriptor;
pub use descriptor::TypeDescriptor;

mod field;
pub use field::FieldDescriptor;

mod shape;
pub use shape::{FieldShape, ShapeKind, TypeShape};

mod tag;
use tag::Tag;
