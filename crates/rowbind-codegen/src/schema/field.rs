use super::ErrorSet;

use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier, used to access the struct field
    pub(crate) ident: syn::Ident,

    /// Declared field name, without any `r#` prefix
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// Persistence tag from `#[rowbind("...")]`, passed through uninterpreted
    pub(crate) tag: Option<syn::LitStr>,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "model fields must be named"));
        };

        Ok(Self {
            ident: ident.clone(),
            name: ident.unraw().to_string(),
            ty: field.ty.clone(),
            tag: tag_from_attrs(&field.attrs)?,
        })
    }
}

/// Reads the `#[rowbind("...")]` attribute, if present.
pub(super) fn tag_from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Option<syn::LitStr>> {
    let mut errs = ErrorSet::new();
    let mut tag = None;

    for attr in attrs {
        if !attr.path().is_ident("rowbind") {
            continue;
        }

        if tag.is_some() {
            errs.push(syn::Error::new_spanned(attr, "duplicate #[rowbind] attribute"));
            continue;
        }

        match attr.parse_args::<syn::LitStr>() {
            Ok(lit) => tag = Some(lit),
            Err(_) => errs.push(syn::Error::new_spanned(
                attr,
                "expected a tag string, e.g. #[rowbind(\"id,primarykey\")]",
            )),
        }
    }

    match errs.collect() {
        Some(err) => Err(err),
        None => Ok(tag),
    }
}
