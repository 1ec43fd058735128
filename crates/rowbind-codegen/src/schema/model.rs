use super::{field::tag_from_attrs, ErrorSet, Field};

#[derive(Debug)]
pub(crate) enum ModelKind {
    /// Struct with named fields
    Record(Vec<Field>),

    /// Newtype struct; described by the wrapped type and never mapped to columns
    Scalar(syn::Type),
}

#[derive(Debug)]
pub(crate) struct Model {
    /// Type identifier
    pub(crate) ident: syn::Ident,

    /// Generics, copied onto the generated impl
    pub(crate) generics: syn::Generics,

    pub(crate) kind: ModelKind,
}

impl Model {
    pub(crate) fn from_ast(ast: &syn::DeriveInput) -> syn::Result<Self> {
        let data = match &ast.data {
            syn::Data::Struct(data) => data,
            syn::Data::Enum(data) => {
                return Err(syn::Error::new_spanned(
                    data.enum_token,
                    "`Model` can only be derived for structs",
                ))
            }
            syn::Data::Union(data) => {
                return Err(syn::Error::new_spanned(
                    data.union_token,
                    "`Model` can only be derived for structs",
                ))
            }
        };

        let kind = match &data.fields {
            syn::Fields::Named(node) => {
                let mut errs = ErrorSet::new();
                let mut fields = vec![];

                for node in &node.named {
                    match Field::from_ast(node) {
                        Ok(field) => fields.push(field),
                        Err(err) => errs.push(err),
                    }
                }

                if let Some(err) = errs.collect() {
                    return Err(err);
                }

                ModelKind::Record(fields)
            }
            syn::Fields::Unnamed(node) if node.unnamed.len() == 1 => {
                let field = &node.unnamed[0];

                if let Some(tag) = tag_from_attrs(&field.attrs)? {
                    return Err(syn::Error::new_spanned(
                        tag,
                        "newtype fields cannot carry a persistence tag",
                    ));
                }

                ModelKind::Scalar(field.ty.clone())
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    "model must have named fields or wrap exactly one value",
                ))
            }
        };

        Ok(Self {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            kind,
        })
    }
}
