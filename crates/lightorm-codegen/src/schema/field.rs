use super::{Column, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Field identifier in the struct
    pub(crate) ident: syn::Ident,

    /// Column or parameter name the field maps to
    pub(crate) name: String,

    /// Field type
    pub(crate) ty: syn::Type,

    /// True if the field is annotated with `#[skip]`
    pub(crate) skip: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut column = None;
        let mut skip = false;

        for attr in &field.attrs {
            if attr.path().is_ident("column") {
                if column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                } else {
                    match Column::from_ast(attr) {
                        Ok(parsed) => column = Some(parsed),
                        Err(err) => errs.push(err),
                    }
                }
            } else if attr.path().is_ident("skip") {
                if skip {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[skip] attribute"));
                } else if let Err(err) = attr.meta.require_path_only() {
                    errs.push(err);
                } else {
                    skip = true;
                }
            }
        }

        if skip && column.is_some() {
            errs.push(syn::Error::new_spanned(
                field,
                "#[skip] and #[column] cannot be combined",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        let name = match column {
            Some(column) => column.name.value(),
            None => ident.to_string().trim_start_matches("r#").to_string(),
        };

        Ok(Field {
            ident: ident.clone(),
            name,
            ty: field.ty.clone(),
            skip,
        })
    }
}
