use super::{ErrorSet, Field};

/// A struct that maps to result rows or to command parameters.
#[derive(Debug)]
pub(crate) struct Record {
    pub(crate) ident: syn::Ident,
    pub(crate) generics: syn::Generics,
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Record> {
        let syn::Fields::Named(named) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "only structs with named fields are supported",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut fields = vec![];

        for field in &named.named {
            match Field::from_ast(field) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        for (i, field) in fields.iter().enumerate() {
            if field.skip {
                continue;
            }

            let duplicate = fields[..i]
                .iter()
                .any(|prev| !prev.skip && prev.name.eq_ignore_ascii_case(&field.name));
            if duplicate {
                errs.push(syn::Error::new_spanned(
                    &field.ident,
                    format!("duplicate column name `{}`", field.name),
                ));
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Record {
            ident: ast.ident.clone(),
            generics: ast.generics.clone(),
            fields,
        })
    }

    /// Fields that map to a column, in declaration order.
    pub(crate) fn mapped(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| !field.skip)
    }

    pub(crate) fn skipped(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|field| field.skip)
    }
}
