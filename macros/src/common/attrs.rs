use syn::{Attribute, LitStr};

/// Options collected from the `#[query(...)]` attributes on one field.
#[derive(Debug, Default)]
pub struct FieldOptions {
    pub rename: Option<LitStr>,
    pub skip: bool,
}

impl FieldOptions {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut options = FieldOptions::default();
        for attr in attrs.iter().filter(|attr| attr.path().is_ident("query")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if options.rename.is_some() {
                        return Err(meta.error("duplicate `rename`"));
                    }
                    options.rename = Some(meta.value()?.parse()?);
                    Ok(())
                } else if meta.path.is_ident("skip") {
                    options.skip = true;
                    Ok(())
                } else {
                    Err(meta.error("expected `rename = \"...\"` or `skip`"))
                }
            })?;
        }
        if options.skip {
            if let Some(rename) = &options.rename {
                return Err(syn::Error::new_spanned(
                    rename,
                    "`rename` has no effect on a skipped field",
                ));
            }
        }
        Ok(options)
    }
}
