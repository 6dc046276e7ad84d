mod from_row;
mod params;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

pub(super) fn from_row(record: &Record) -> TokenStream {
    wrap_in_const(from_row::expand(record, &lightorm()))
}

pub(super) fn params(record: &Record) -> TokenStream {
    wrap_in_const(params::expand(record, &lightorm()))
}

fn lightorm() -> TokenStream {
    quote!(_lightorm::codegen_support)
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            extern crate lightorm as _lightorm;
            #code
        };
    }
}
