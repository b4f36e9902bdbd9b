use syn::ext::IdentExt;
use syn::punctuated::Punctuated;

/// One `key = "value"` pair from a `#[tag(...)]` attribute.
#[derive(Debug)]
pub(crate) struct Tag {
    pub(crate) key: syn::Ident,
    pub(crate) value: syn::LitStr,
}

impl Tag {
    /// Parses every pair of a `#[tag(sql = "user_id", json = "userId")]`
    /// attribute.
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Vec<Tag>> {
        let tags = attr.parse_args_with(Punctuated::<Tag, syn::Token![,]>::parse_terminated)?;

        if tags.is_empty() {
            return Err(syn::Error::new_spanned(
                attr,
                "expected at least one `key = \"value\"` pair",
            ));
        }

        Ok(tags.into_iter().collect())
    }
}

impl syn::parse::Parse for Tag {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        // Keys may be keywords, e.g. `#[tag(type = "...")]`
        let key = input.call(syn::Ident::parse_any)?;
        let _eq_token: syn::Token![=] = input.parse()?;
        let value = input.parse()?;

        Ok(Tag { key, value })
    }
}
