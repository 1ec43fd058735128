extern crate proc_macro;

use proc_macro::TokenStream;

/// Implements `rowbind::Model` for a struct.
///
/// Fields may carry a persistence tag, `#[rowbind("column,flag,...")]`. A newtype
/// struct derives a scalar shape: it can be loaded by hand but not mapped to columns.
#[proc_macro_derive(Model, attributes(rowbind))]
pub fn derive_model(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
