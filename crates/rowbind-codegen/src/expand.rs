use crate::schema::{Field, Model, ModelKind};

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

struct Expand<'a> {
    /// The model being expanded
    model: &'a Model,

    /// Type name as reported in shapes and errors
    name: String,

    /// Path prefix for rowbind types
    rowbind: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let ident = &self.model.ident;
        let (impl_generics, ty_generics, where_clause) = self.model.generics.split_for_impl();

        let (shape, get, set) = match &self.model.kind {
            ModelKind::Record(fields) => (
                self.expand_record_shape(fields),
                self.expand_get(fields),
                self.expand_set(fields),
            ),
            ModelKind::Scalar(ty) => (
                self.expand_scalar_shape(ty),
                quote! {
                    let _ = field;
                    #rowbind::Option::None
                },
                self.expand_scalar_set(),
            ),
        };

        wrap_in_const(quote! {
            impl #impl_generics #rowbind::Model for #ident #ty_generics #where_clause {
                fn shape() -> #rowbind::TypeShape {
                    #shape
                }

                fn get(&self, field: &str) -> #rowbind::Option<#rowbind::Value> {
                    #get
                }

                fn set(&mut self, field: &str, value: #rowbind::Value) -> #rowbind::Result<()> {
                    #set
                }
            }
        })
    }

    fn expand_record_shape(&self, fields: &[Field]) -> TokenStream {
        let rowbind = &self.rowbind;
        let name = &self.name;

        let fields = fields.iter().map(|field| {
            let field_name = &field.name;
            let ty = &field.ty;
            let tag = match &field.tag {
                Some(tag) => quote!(#rowbind::Option::Some(#tag)),
                None => quote!(#rowbind::Option::None),
            };

            quote! {
                .field(#rowbind::FieldShape {
                    name: #field_name,
                    ty: <#ty as #rowbind::Primitive>::TYPE,
                    nullable: <#ty as #rowbind::Primitive>::NULLABLE,
                    tag: #tag,
                })
            }
        });

        quote! {
            #rowbind::TypeShape::record(#name)
                #( #fields )*
        }
    }

    fn expand_scalar_shape(&self, ty: &syn::Type) -> TokenStream {
        let rowbind = &self.rowbind;
        let name = &self.name;

        quote!(#rowbind::TypeShape::scalar(#name, <#ty as #rowbind::Primitive>::TYPE))
    }

    fn expand_get(&self, fields: &[Field]) -> TokenStream {
        let rowbind = &self.rowbind;

        let arms = fields.iter().map(|field| {
            let field_name = &field.name;
            let ident = &field.ident;

            quote! {
                #field_name => #rowbind::Option::Some(
                    #rowbind::Primitive::to_value(&self.#ident)
                ),
            }
        });

        quote! {
            match field {
                #( #arms )*
                _ => #rowbind::Option::None,
            }
        }
    }

    fn expand_set(&self, fields: &[Field]) -> TokenStream {
        let rowbind = &self.rowbind;
        let name = &self.name;

        let arms = fields.iter().map(|field| {
            let field_name = &field.name;
            let ident = &field.ident;
            let ty = &field.ty;

            quote! {
                #field_name => {
                    self.#ident = <#ty as #rowbind::Primitive>::load(value)?;
                    #rowbind::Ok(())
                }
            }
        });

        quote! {
            match field {
                #( #arms )*
                _ => #rowbind::Err(#rowbind::Error::from_args(format_args!(
                    "type `{}` has no field `{}`",
                    #name,
                    field
                ))),
            }
        }
    }

    fn expand_scalar_set(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let name = &self.name;

        quote! {
            let _ = value;
            #rowbind::Err(#rowbind::Error::from_args(format_args!(
                "type `{}` has no field `{}`",
                #name,
                field
            )))
        }
    }
}

pub(super) fn model(model: &Model) -> TokenStream {
    Expand {
        model,
        name: model.ident.unraw().to_string(),
        rowbind: quote!(_rowbind::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbind as _rowbind;
            #code
        };
    }
}
