use crate::stmt::Type;

/// Persistence metadata for one field of a record type.
///
/// Owned by its [`TypeDescriptor`](super::TypeDescriptor). A transient field has an empty
/// `column` and every flag other than `transient` unset.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field identifier as declared on the record type
    pub name: String,

    /// Storage column, empty when transient
    pub column: String,

    pub primary_key: bool,

    /// The storage layer assigns the value (auto-increment key, server default, ...)
    pub auto_increment: bool,

    /// Never read from or written to storage
    pub transient: bool,

    /// Declared value kind
    pub ty: Type,

    /// Declared as `Option<_>`; NULL loads as `None` rather than the zero value
    pub nullable: bool,
}

impl FieldDescriptor {
    pub(super) fn transient(name: &str, ty: Type, nullable: bool) -> FieldDescriptor {
        FieldDescriptor {
            name: name.to_string(),
            column: String::new(),
            primary_key: false,
            auto_increment: false,
            transient: true,
            ty,
            nullable,
        }
    }

    /// True if the field is mapped to a column.
    pub fn is_persisted(&self) -> bool {
        !self.transient
    }

    /// True if an INSERT should carry a value for this field.
    pub fn is_insertable(&self) -> bool {
        !self.transient && !self.auto_increment
    }
}
