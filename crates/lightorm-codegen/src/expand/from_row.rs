use crate::schema::Record;

use proc_macro2::{Literal, TokenStream};
use quote::quote;

pub(super) fn expand(record: &Record, lightorm: &TokenStream) -> TokenStream {
    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    let names = record.mapped().map(|field| &field.name);

    let loads = record.mapped().enumerate().map(|(index, field)| {
        let field_ident = &field.ident;
        let index = Literal::usize_unsuffixed(index);
        quote!(#field_ident: #lightorm::coerce(map.take(&mut row, #index)),)
    });

    let defaults = record.skipped().map(|field| {
        let field_ident = &field.ident;
        quote!(#field_ident: #lightorm::Default::default(),)
    });

    quote! {
        impl #impl_generics #lightorm::FromRow for #ident #ty_generics #where_clause {
            fn fields() -> &'static [&'static str] {
                &[#(#names),*]
            }

            #[allow(unused_mut, unused_variables)]
            fn from_row(
                mut row: #lightorm::Row,
                map: &#lightorm::RowMap,
            ) -> #lightorm::Result<Self> {
                Ok(Self {
                    #(#loads)*
                    #(#defaults)*
                })
            }
        }
    }
}
