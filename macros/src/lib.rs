use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::parse::{Parse, ParseStream, Result};
use syn::punctuated::Punctuated;
use syn::{parse_macro_input, Expr, Ident, Token};

/// Tuples up to this arity are handled by `parsel::basic::seq` directly.
const MAX_TUPLE: usize = 9;

struct Args(Punctuated<Expr, Token![,]>);

impl Parse for Args {
    fn parse(input: ParseStream) -> Result<Self> {
        Punctuated::parse_terminated(input).map(Self)
    }
}

fn empty_error(name: &str) -> TokenStream {
    syn::Error::new(
        Span::call_site(),
        format!("`{name}!` requires at least one parser"),
    )
    .to_compile_error()
    .into()
}

fn elem(idx: usize) -> Ident {
    Ident::new(&format!("__parsel_seq_elem_{idx}"), Span::call_site())
}

#[proc_macro]
pub fn seq(args: TokenStream) -> TokenStream {
    let Args(args) = parse_macro_input!(args as Args);
    let args: Vec<_> = args.into_iter().collect();
    if args.is_empty() {
        return empty_error("seq");
    }
    if (2..=MAX_TUPLE).contains(&args.len()) {
        return quote! {
            { ::parsel::basic::seq((#(#args,)*)) }
        }
        .into();
    }

    let pairs = seq_pairs(&args[..]);
    let tuple = seq_tuple(0, args.len());
    let vars = (0..args.len()).map(elem);
    quote! {
        {
            ::parsel::basic::map({ #pairs }, |#tuple| (#(#vars,)*))
        }
    }
    .into()
}

fn seq_pairs(args: &[Expr]) -> proc_macro2::TokenStream {
    match args {
        [arg] => quote! { { #arg } },
        [first, second] => quote! { { ::parsel::basic::pair(#first, #second) } },
        _ => {
            let mid = args.len() / 2;
            let first = seq_pairs(&args[..mid]);
            let second = seq_pairs(&args[mid..]);
            quote! { { ::parsel::basic::pair(#first, #second) } }
        }
    }
}

fn seq_tuple(start: usize, end: usize) -> proc_macro2::TokenStream {
    match end - start {
        1 => {
            let var = elem(start);
            quote! { #var }
        }
        2 => {
            let first = elem(start);
            let second = elem(start + 1);
            quote! { (#first, #second) }
        }
        len => {
            let mid = start + len / 2;
            let first = seq_tuple(start, mid);
            let second = seq_tuple(mid, end);
            quote! { (#first, #second) }
        }
    }
}

#[proc_macro]
pub fn alt(args: TokenStream) -> TokenStream {
    let Args(args) = parse_macro_input!(args as Args);
    let args: Vec<_> = args.into_iter().collect();
    if args.is_empty() {
        return empty_error("alt");
    }
    alt_impl(&args[..]).into()
}

fn alt_impl(args: &[Expr]) -> proc_macro2::TokenStream {
    match args {
        [arg] => quote! { { #arg } },
        [first, second] => quote! { { ::parsel::basic::any((#first, #second)) } },
        _ => {
            let mid = args.len() / 2;
            let first = alt_impl(&args[..mid]);
            let second = alt_impl(&args[mid..]);
            quote! { { ::parsel::basic::any((#first, #second)) } }
        }
    }
}
