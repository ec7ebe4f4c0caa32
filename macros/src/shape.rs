//! Implementation of `#[derive(Shape)]`.
//!
//! Structs become products and enums become sums. Both get `Shape`,
//! `Traverse` and `Fold` implementations registered at the intrinsic tier.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    Data, DataEnum, DataStruct, DeriveInput, Fields, Ident, Path, Type, WherePredicate,
    parse_macro_input, parse_quote,
};

use crate::common::{crate_path, extend_generics, member};

pub fn derive_shape_impl(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn generate(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let krate = crate_path(&input.attrs)?;

    match &input.data {
        Data::Struct(data) => Ok(generate_product(input, data, &krate)),
        Data::Enum(data) => Ok(generate_sum(input, data, &krate)),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "[shapewalk] `Shape` cannot be derived for unions: the active field is not known statically",
        )),
    }
}

/// Bounds for every field type: `__V: Visit<T, __X>` and `__F: Combine<__A, T, __X>`.
fn field_bounds<'a>(
    types: impl Iterator<Item = &'a Type> + Clone,
    krate: &Path,
) -> (Vec<WherePredicate>, Vec<WherePredicate>) {
    let visit = types
        .clone()
        .map(|ty| parse_quote!(__V: #krate::Visit<#ty, __X>))
        .collect();
    let combine = types
        .map(|ty| parse_quote!(__F: #krate::Combine<__A, #ty, __X>))
        .collect();
    (visit, combine)
}

fn shape_impl(input: &DeriveInput, kind: &str, krate: &Path) -> TokenStream2 {
    let name = &input.ident;
    let kind = Ident::new(kind, name.span());
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics #krate::Shape for #name #ty_generics #where_clause {
            const KIND: #krate::ShapeKind = #krate::ShapeKind::#kind;
            const TIER: #krate::Tier = #krate::Tier::Intrinsic;
        }
    }
}

fn generate_product(input: &DeriveInput, data: &DataStruct, krate: &Path) -> TokenStream2 {
    let name = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let members: Vec<_> = data
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| member(index, field))
        .collect();
    let types: Vec<_> = data.fields.iter().map(|field| &field.ty).collect();

    let (mut visit_bounds, mut combine_bounds) = field_bounds(types.iter().copied(), krate);
    if !members.is_empty() {
        visit_bounds.push(parse_quote!(__X: ::core::clone::Clone));
        combine_bounds.push(parse_quote!(__X: ::core::clone::Clone));
    }

    let traverse_generics = extend_generics(&input.generics, quote!(__V: ?Sized, __X), visit_bounds);
    let (traverse_impl_generics, _, traverse_where) = traverse_generics.split_for_impl();
    let fold_generics = extend_generics(&input.generics, quote!(__A, __F: ?Sized, __X), combine_bounds);
    let (fold_impl_generics, _, fold_where) = fold_generics.split_for_impl();

    let shape = shape_impl(input, "Product", krate);

    quote! {
        #shape

        impl #traverse_impl_generics #krate::Traverse<__V, __X> for #name #ty_generics #traverse_where {
            #[inline]
            #[allow(unused_variables)]
            fn traverse(&self, visitor: &mut __V, extra: __X) {
                #(
                    <__V as #krate::Visit<#types, __X>>::visit(
                        visitor,
                        &self.#members,
                        ::core::clone::Clone::clone(&extra),
                    );
                )*
            }
        }

        impl #fold_impl_generics #krate::Fold<__A, __F, __X> for #name #ty_generics #fold_where {
            #[inline]
            #[allow(unused_variables)]
            fn fold(&self, init: __A, combiner: &mut __F, extra: __X) -> __A {
                let acc = init;
                #(
                    let acc = <__F as #krate::Combine<__A, #types, __X>>::combine(
                        combiner,
                        acc,
                        &self.#members,
                        ::core::clone::Clone::clone(&extra),
                    );
                )*
                acc
            }
        }
    }
}

/// One match arm per variant for traversal and for fold.
///
/// A unit variant visits nothing (and folds to the input accumulator), a
/// single-field variant hands its field over with `extra` as-is, and a
/// multi-field variant is a product nested in the sum.
fn variant_arms(
    name: &Ident,
    data: &DataEnum,
    krate: &Path,
) -> (Vec<TokenStream2>, Vec<TokenStream2>, bool) {
    let mut traverse_arms = Vec::new();
    let mut fold_arms = Vec::new();
    let mut needs_clone = false;

    for variant in &data.variants {
        let ident = &variant.ident;
        let bindings: Vec<_> = (0..variant.fields.len())
            .map(|i| Ident::new(&format!("__field{i}"), ident.span()))
            .collect();
        let types: Vec<_> = variant.fields.iter().map(|field| &field.ty).collect();

        let pattern = match &variant.fields {
            Fields::Unit => quote!(#name::#ident),
            Fields::Unnamed(_) => quote!(#name::#ident(#(ref #bindings),*)),
            Fields::Named(fields) => {
                let names = fields.named.iter().map(|field| &field.ident);
                quote!(#name::#ident { #(#names: ref #bindings),* })
            }
        };

        match bindings.as_slice() {
            [] => {
                traverse_arms.push(quote!(#pattern => {}));
                fold_arms.push(quote!(#pattern => init));
            }
            [binding] => {
                let ty = types[0];
                traverse_arms.push(quote! {
                    #pattern => <__V as #krate::Visit<#ty, __X>>::visit(visitor, #binding, extra)
                });
                fold_arms.push(quote! {
                    #pattern => <__F as #krate::Combine<__A, #ty, __X>>::combine(combiner, init, #binding, extra)
                });
            }
            _ => {
                needs_clone = true;
                traverse_arms.push(quote! {
                    #pattern => {
                        #(
                            <__V as #krate::Visit<#types, __X>>::visit(
                                visitor,
                                #bindings,
                                ::core::clone::Clone::clone(&extra),
                            );
                        )*
                    }
                });
                fold_arms.push(quote! {
                    #pattern => {
                        let acc = init;
                        #(
                            let acc = <__F as #krate::Combine<__A, #types, __X>>::combine(
                                combiner,
                                acc,
                                #bindings,
                                ::core::clone::Clone::clone(&extra),
                            );
                        )*
                        acc
                    }
                });
            }
        }
    }

    (traverse_arms, fold_arms, needs_clone)
}

fn generate_sum(input: &DeriveInput, data: &DataEnum, krate: &Path) -> TokenStream2 {
    let name = &input.ident;
    let (_, ty_generics, _) = input.generics.split_for_impl();

    let types = data.variants.iter().flat_map(|v| v.fields.iter().map(|f| &f.ty));
    let (mut visit_bounds, mut combine_bounds) = field_bounds(types, krate);

    let (traverse_arms, fold_arms, needs_clone) = variant_arms(name, data, krate);
    if needs_clone {
        visit_bounds.push(parse_quote!(__X: ::core::clone::Clone));
        combine_bounds.push(parse_quote!(__X: ::core::clone::Clone));
    }

    let traverse_generics = extend_generics(&input.generics, quote!(__V: ?Sized, __X), visit_bounds);
    let (traverse_impl_generics, _, traverse_where) = traverse_generics.split_for_impl();
    let fold_generics = extend_generics(&input.generics, quote!(__A, __F: ?Sized, __X), combine_bounds);
    let (fold_impl_generics, _, fold_where) = fold_generics.split_for_impl();

    let shape = shape_impl(input, "Sum", krate);

    quote! {
        #shape

        impl #traverse_impl_generics #krate::Traverse<__V, __X> for #name #ty_generics #traverse_where {
            #[inline]
            #[allow(unused_variables)]
            fn traverse(&self, visitor: &mut __V, extra: __X) {
                match *self {
                    #(#traverse_arms,)*
                }
            }
        }

        impl #fold_impl_generics #krate::Fold<__A, __F, __X> for #name #ty_generics #fold_where {
            #[inline]
            #[allow(unused_variables)]
            fn fold(&self, init: __A, combiner: &mut __F, extra: __X) -> __A {
                match *self {
                    #(#fold_arms,)*
                }
            }
        }
    }
}
