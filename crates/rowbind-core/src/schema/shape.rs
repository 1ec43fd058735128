use crate::stmt::Type;

/// Declarative description of a type, as supplied by `#[derive(Model)]` or by hand.
///
/// A shape is the input to [`TypeDescriptor::from_shape`](super::TypeDescriptor::from_shape).
/// It carries the raw field tags; interpreting them is the descriptor's job.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeShape {
    /// Type name, for diagnostics
    pub name: &'static str,

    pub kind: ShapeKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ShapeKind {
    /// A struct with named fields, in declaration order
    Record(Vec<FieldShape>),

    /// Anything without named fields, e.g. a newtype over a primitive
    Scalar(Type),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldShape {
    /// Field identifier as declared
    pub name: &'static str,

    /// Declared value kind
    pub ty: Type,

    /// True when the field is declared as `Option<_>`
    pub nullable: bool,

    /// Raw persistence tag: `"column,flag,flag"`
    pub tag: Option<&'static str>,
}

impl TypeShape {
    pub fn record(name: &'static str) -> TypeShape {
        TypeShape {
            name,
            kind: ShapeKind::Record(vec![]),
        }
    }

    pub fn scalar(name: &'static str, ty: Type) -> TypeShape {
        TypeShape {
            name,
            kind: ShapeKind::Scalar(ty),
        }
    }

    /// Appends a field. Has no effect on scalar shapes.
    pub fn field(mut self, field: FieldShape) -> TypeShape {
        if let ShapeKind::Record(fields) = &mut self.kind {
            fields.push(field);
        }
        self
    }

    pub fn is_record(&self) -> bool {
        matches!(self.kind, ShapeKind::Record(_))
    }
}

impl FieldShape {
    pub fn new(name: &'static str, ty: Type) -> FieldShape {
        FieldShape {
            name,
            ty,
            nullable: false,
            tag: None,
        }
    }

    pub fn nullable(mut self) -> FieldShape {
        self.nullable = true;
        self
    }

    pub fn tag(mut self, tag: &'static str) -> FieldShape {
        self.tag = Some(tag);
        self
    }
}
