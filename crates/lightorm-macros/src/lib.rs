extern crate proc_macro;

use proc_macro::TokenStream;

/// Materializes rows into a struct, matching columns to fields by name.
///
/// Field attributes:
///
/// - `#[column("name")]` reads the field from a differently named column.
/// - `#[skip]` leaves the field at its default value.
#[proc_macro_derive(FromRow, attributes(column, skip))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    match lightorm_codegen::generate_from_row(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Binds a struct's fields to named command placeholders.
///
/// Accepts the same field attributes as `FromRow`.
#[proc_macro_derive(Params, attributes(column, skip))]
pub fn derive_params(input: TokenStream) -> TokenStream {
    match lightorm_codegen::generate_params(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
