use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_fields_mut_body(&self) -> TokenStream {
        let rowscan = &self.rowscan;

        let fields = self.record.fields.iter().map(|field| {
            let ident = &field.ident;

            if !field.public {
                quote!(#rowscan::FieldMut::Opaque)
            } else if field.attrs.embed {
                quote!(#rowscan::FieldMut::Embedded(&mut self.#ident))
            } else {
                quote!(#rowscan::FieldMut::Value(&mut self.#ident))
            }
        });

        quote!(vec![ #( #fields, )* ])
    }
}
