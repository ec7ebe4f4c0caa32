//! Implementation of `#[derive(Composite)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, WherePredicate, parse_macro_input, parse_quote};

use crate::common::{children_field, crate_path, extend_generics};

pub fn derive_composite_impl(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let krate = crate_path(&input.attrs)?;
    let name = &input.ident;

    let data = match &input.data {
        Data::Struct(data) => data,
        Data::Enum(data) => {
            return Err(syn::Error::new_spanned(
                data.enum_token,
                "[shapewalk] `Composite` can only be derived for structs; derive `Shape` for a sum",
            ));
        }
        Data::Union(data) => {
            return Err(syn::Error::new_spanned(
                data.union_token,
                "[shapewalk] `Composite` can only be derived for structs",
            ));
        }
    };

    // Without a `#[children]` field the node is a leaf.
    let (children_ty, children_expr) = match children_field(&data.fields)? {
        Some((member, ty)) => (quote!(#ty), quote!(&self.#member)),
        None => (quote!(()), quote!(&())),
    };

    // Generic children need a `ChildList` bound; concrete ones are checked
    // by the `Composite` impl itself.
    let mut child_list: Vec<WherePredicate> = Vec::new();
    if !input.generics.params.is_empty() {
        child_list.push(parse_quote!(#children_ty: #krate::ChildList));
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let composite_generics = extend_generics(&input.generics, TokenStream2::new(), child_list.clone());
    let (_, _, composite_where) = composite_generics.split_for_impl();

    child_list.push(parse_quote!(__V: #krate::VisitNode<#name #ty_generics, __X>));
    let traverse_generics = extend_generics(&input.generics, quote!(__V: ?Sized, __X), child_list);
    let (traverse_impl_generics, _, traverse_where) = traverse_generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::Shape for #name #ty_generics #where_clause {
            const KIND: #krate::ShapeKind = #krate::ShapeKind::Composite;
            const TIER: #krate::Tier = #krate::Tier::Intrinsic;
        }

        impl #impl_generics #krate::Composite for #name #ty_generics #composite_where {
            type Children = #children_ty;

            #[inline]
            fn children(&self) -> &Self::Children {
                #children_expr
            }
        }

        impl #traverse_impl_generics #krate::Traverse<__V, __X> for #name #ty_generics #traverse_where {
            #[inline]
            fn traverse(&self, visitor: &mut __V, extra: __X) {
                #krate::traverse_node(self, visitor, extra)
            }
        }
    })
}
