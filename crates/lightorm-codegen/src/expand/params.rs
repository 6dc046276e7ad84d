use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn expand(record: &Record, lightorm: &TokenStream) -> TokenStream {
    let ident = &record.ident;
    let (impl_generics, ty_generics, where_clause) = record.generics.split_for_impl();

    let names = record.mapped().map(|field| {
        let name = &field.name;
        quote!(#lightorm::ParamName::named(#name))
    });

    let values = record.mapped().map(|field| {
        let field_ident = &field.ident;
        let ty = &field.ty;
        quote! {
            #lightorm::TypedValue {
                value: #lightorm::Primitive::to_value(&self.#field_ident),
                ty: <#ty as #lightorm::Primitive>::TYPE,
            }
        }
    });

    quote! {
        impl #impl_generics #lightorm::Params for #ident #ty_generics #where_clause {
            fn names(&self) -> #lightorm::Vec<#lightorm::ParamName> {
                vec![#(#names),*]
            }

            fn values(&self) -> #lightorm::Vec<#lightorm::TypedValue> {
                vec![#(#values),*]
            }
        }
    }
}
