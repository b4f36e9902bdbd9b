use super::Expand;
use crate::schema::Field;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;

impl Expand<'_> {
    pub(super) fn expand_record_type_body(&self) -> TokenStream {
        let rowscan = &self.rowscan;
        let name = self.record.ident.to_string();
        let fields = self.record.fields.iter().map(|field| self.expand_field(field));

        quote! {
            #rowscan::RecordType::of::<Self>(#name, vec![ #( #fields, )* ])
        }
    }

    fn expand_field(&self, field: &Field) -> TokenStream {
        let rowscan = &self.rowscan;
        let index = field.index;
        let name = field.ident.unraw().to_string();

        let mut expr = quote!(#rowscan::Field::new(#index, #name));

        for tag in &field.attrs.tags {
            let key = tag.key.unraw().to_string();
            let value = &tag.value;
            expr = quote!(#expr.tag(#key, #value));
        }

        if !field.public {
            // Private fields are never read, so the type carries no bound
            return quote!(#expr.private());
        }

        if field.attrs.embed {
            let ty = &field.ty;
            expr = quote!(#expr.embedded(<#ty as #rowscan::Record>::record_type));
        }

        expr
    }
}
