//! Shared utilities for the shapewalk derives.

use proc_macro2::TokenStream as TokenStream2;
use syn::{
    Attribute, Field, Fields, Generics, Index, LitStr, Member, Meta, Path, Type, WherePredicate,
    parse_quote,
};

/// Resolve the path generated code uses to reach the runtime crate.
///
/// Defaults to the `shapewalk` facade; `#[shapewalk(crate = "path")]`
/// overrides it.
pub(crate) fn crate_path(attrs: &[Attribute]) -> syn::Result<Path> {
    let mut path = None;

    for attr in attrs.iter().filter(|a| a.path().is_ident("shapewalk")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                if path.is_some() {
                    return Err(meta.error("[shapewalk] duplicate `crate` argument"));
                }
                let lit: LitStr = meta.value()?.parse()?;
                path = Some(lit.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("[shapewalk] expected `crate = \"path\"`"))
            }
        })?;
    }

    Ok(path.unwrap_or_else(|| parse_quote!(::shapewalk)))
}

/// Locate the field marked `#[children]`, if any.
///
/// # Returns
/// - `Ok(Some((member, type)))` for exactly one marked field.
/// - `Ok(None)` if no field is marked.
/// - `Err(...)` if several fields are marked or the marker has arguments.
pub(crate) fn children_field(fields: &Fields) -> syn::Result<Option<(Member, Type)>> {
    let mut found: Option<(Member, Type)> = None;

    for (index, field) in fields.iter().enumerate() {
        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("children")) else {
            continue;
        };

        if !matches!(attr.meta, Meta::Path(_)) {
            return Err(syn::Error::new_spanned(
                attr,
                "[shapewalk] `#[children]` takes no arguments",
            ));
        }
        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                "[shapewalk] only one field may be marked `#[children]`",
            ));
        }

        found = Some((member(index, field), field.ty.clone()));
    }

    Ok(found)
}

/// How to name a field on `self`: by identifier, or by position for tuple
/// structs.
pub(crate) fn member(index: usize, field: &Field) -> Member {
    match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(index)),
    }
}

/// Copy `generics` and append extra type parameters and where-predicates.
///
/// The item's own parameters come first so that lifetimes stay in front.
pub(crate) fn extend_generics(
    generics: &Generics,
    params: TokenStream2,
    predicates: impl IntoIterator<Item = WherePredicate>,
) -> Generics {
    let mut extended = generics.clone();
    if !params.is_empty() {
        let params: Generics = parse_quote!(<#params>);
        extended.params.extend(params.params);
    }
    extended.make_where_clause().predicates.extend(predicates);
    extended
}
