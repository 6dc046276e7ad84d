mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate_from_row(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let record = schema::Record::from_ast(&item)?;

    Ok(expand::from_row(&record))
}

pub fn generate_params(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let record = schema::Record::from_ast(&item)?;

    Ok(expand::params(&record))
}
