mod fields;
mod record_type;

use crate::schema::Record;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowscan types
    rowscan: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let rowscan = &self.rowscan;
        let ident = &self.record.ident;
        let record_type_body = self.expand_record_type_body();
        let fields_mut_body = self.expand_fields_mut_body();

        wrap_in_const(quote! {
            impl #rowscan::Record for #ident {
                fn record_type() -> #rowscan::RecordType {
                    #record_type_body
                }

                fn fields_mut(&mut self) -> #rowscan::Vec<#rowscan::FieldMut<'_>> {
                    #fields_mut_body
                }
            }
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rowscan: quote!(_rowscan::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowscan as _rowscan;
            #code
        };
    }
}
