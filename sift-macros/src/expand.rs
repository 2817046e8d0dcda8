//! Code generation for parsed filter literals.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::FilterAst;

/// Emits an expression of type `sift::Filter` for `ast`.
///
/// `root` is the path to the `sift` crate as seen from the call site.
pub(crate) fn expand(ast: &FilterAst, root: &TokenStream) -> TokenStream {
    match ast {
        FilterAst::All => quote! { #root::Filter::All },
        FilterAst::Names(names) => quote! {
            #root::Filter::Names(::std::vec![#(::std::string::String::from(#names)),*])
        },
        FilterAst::Object(fields) => {
            let keys = fields.iter().map(|(key, _)| key);
            let filters = fields.iter().map(|(_, filter)| expand(filter, root));
            quote! {
                #root::Filter::Object(#root::ObjectFilter::new() #(.field(#keys, #filters))*)
            }
        }
        FilterAst::Matcher { pattern, filters } => {
            let filters = filters.iter().map(|filter| expand(filter, root));
            quote! {
                #root::Filter::Matcher(#root::KeyMatcher::new(
                    #root::__private::compile_pattern(#pattern),
                    ::std::vec![#(#filters),*],
                ))
            }
        }
        FilterAst::Expr(expr) => quote! {
            ::core::convert::Into::<#root::Filter>::into(#expr)
        },
    }
}
