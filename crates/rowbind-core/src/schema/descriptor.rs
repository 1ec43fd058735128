use super::{FieldDescriptor, FieldShape, ShapeKind, Tag, TypeShape};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::HashMap;

/// Persistence metadata for one record type.
///
/// Built once from a [`TypeShape`] and immutable afterwards. Field order follows declaration
/// order, transient fields included.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    name: String,

    /// Field names in declaration order
    field_names: Vec<String>,

    fields: IndexMap<String, FieldDescriptor>,

    /// Column name to index in `fields`, persisted fields only
    columns: HashMap<String, usize>,
}

impl TypeDescriptor {
    /// Interprets a shape's tags and builds the descriptor.
    ///
    /// Fails when the shape is not a record, a field name repeats, a tag has an unknown
    /// flag, or two persisted fields share a column.
    pub fn from_shape(shape: &TypeShape) -> Result<TypeDescriptor> {
        let ShapeKind::Record(field_shapes) = &shape.kind else {
            return Err(Error::type_mapping(shape.name, "not a record type"));
        };

        let mut descriptor = TypeDescriptor {
            name: shape.name.to_string(),
            field_names: Vec::with_capacity(field_shapes.len()),
            fields: IndexMap::with_capacity(field_shapes.len()),
            columns: HashMap::new(),
        };

        for field_shape in field_shapes {
            let field = build_field(shape.name, field_shape)?;

            if descriptor.fields.contains_key(&field.name) {
                return Err(Error::type_mapping(
                    shape.name,
                    format!("duplicate field `{}`", field.name),
                ));
            }

            if !field.transient {
                let index = descriptor.fields.len();
                if let Some(prev) = descriptor.columns.insert(field.column.clone(), index) {
                    return Err(Error::type_mapping(
                        shape.name,
                        format!(
                            "fields `{}` and `{}` both map to column `{}`",
                            descriptor.fields[prev].name, field.name, field.column
                        ),
                    ));
                }
            }

            descriptor.field_names.push(field.name.clone());
            descriptor.fields.insert(field.name.clone(), field);
        }

        Ok(descriptor)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// All field names in declaration order, transient ones included.
    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }

    pub fn fields(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields.values()
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.get(name)
    }

    /// The persisted field stored in `column`. Matching is case-sensitive.
    pub fn field_for_column(&self, column: &str) -> Option<&FieldDescriptor> {
        let index = *self.columns.get(column)?;
        Some(&self.fields[index])
    }

    pub fn primary_key(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields().filter(|field| field.primary_key)
    }

    /// Fields an INSERT should carry: persisted and not generated by the database.
    pub fn insertable(&self) -> impl Iterator<Item = &FieldDescriptor> + '_ {
        self.fields().filter(|field| field.is_insertable())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn build_field(type_name: &str, shape: &FieldShape) -> Result<FieldDescriptor> {
    let tag = match shape.tag {
        Some(src) => Tag::parse(src).map_err(|flag| {
            Error::type_mapping(
                type_name,
                format!("field `{}` has unrecognized tag flag `{flag}`", shape.name),
            )
        })?,
        None => Tag::default(),
    };

    if tag.transient {
        return Ok(FieldDescriptor::transient(
            shape.name,
            shape.ty,
            shape.nullable,
        ));
    }

    // Key and generated fields default to the lower-cased field name; everything else keeps
    // the declared spelling.
    let column = match tag.column {
        Some(column) => column.to_string(),
        None if tag.primary_key || tag.auto_increment => shape.name.to_lowercase(),
        None => shape.name.to_string(),
    };

    Ok(FieldDescriptor {
        name: shape.name.to_string(),
        column,
        primary_key: tag.primary_key,
        auto_increment: tag.auto_increment,
        transient: false,
        ty: shape.ty,
        nullable: shape.nullable,
    })
}
