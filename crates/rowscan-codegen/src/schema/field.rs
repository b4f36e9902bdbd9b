use super::{ErrorSet, Tag};

#[derive(Debug)]
pub(crate) struct Field {
    /// Index of field in the containing record
    pub(crate) index: usize,

    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Field type
    pub(crate) ty: syn::Type,

    /// True if the field is declared `pub`
    pub(crate) public: bool,

    /// Field attributes
    pub(crate) attrs: FieldAttr,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    /// Key/value pairs from every `#[tag(...)]` on the field
    pub(crate) tags: Vec<Tag>,

    /// True if the field is annotated with `#[embed]`
    pub(crate) embed: bool,
}

impl Field {
    pub(super) fn from_ast(field: &syn::Field, index: usize) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();

        for attr in &field.attrs {
            if attr.path().is_ident("tag") {
                let tags = errs.check(Tag::from_ast(attr)).unwrap_or_default();

                for tag in tags {
                    if attrs.tags.iter().any(|existing| existing.key == tag.key) {
                        errs.push(syn::Error::new_spanned(
                            &tag.key,
                            format!("duplicate tag key `{}`", tag.key),
                        ));
                    } else {
                        attrs.tags.push(tag);
                    }
                }
            } else if attr.path().is_ident("embed") {
                if errs.check(attr.meta.require_path_only()).is_none() {
                    continue;
                }

                if attrs.embed {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[embed] attribute"));
                } else {
                    attrs.embed = true;
                }
            }
        }

        errs.finish(Field {
            index,
            ident: ident.clone(),
            ty: field.ty.clone(),
            public: matches!(field.vis, syn::Visibility::Public(_)),
            attrs,
        })
    }
}
