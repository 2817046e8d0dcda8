//! Parsing of the `filter!` literal syntax.

use std::collections::HashSet;

use regex::Regex;
use syn::{
    braced, bracketed,
    ext::IdentExt,
    parenthesized,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token, Error, Expr, Ident, Lit, LitStr, Result, Token,
};

/// A parsed filter literal.
#[derive(Debug)]
pub(crate) enum FilterAst {
    /// `All`
    All,
    /// `["a", "b"]`
    Names(Vec<LitStr>),
    /// `{ key: <filter>, ... }`, keys normalized to string literals.
    Object(Vec<(LitStr, FilterAst)>),
    /// `match("pattern", <filter>, ...)`
    Matcher {
        pattern: LitStr,
        filters: Vec<FilterAst>,
    },
    /// `(expr)`
    Expr(Expr),
}

impl Parse for FilterAst {
    fn parse(input: ParseStream<'_>) -> Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(token::Bracket) {
            parse_names(input)
        } else if lookahead.peek(token::Brace) {
            parse_object(input)
        } else if lookahead.peek(Token![match]) {
            parse_matcher(input)
        } else if lookahead.peek(token::Paren) {
            let content;
            parenthesized!(content in input);
            Ok(Self::Expr(content.parse()?))
        } else if lookahead.peek(Ident) {
            let ident: Ident = input.parse()?;
            if ident == "All" {
                Ok(Self::All)
            } else {
                Err(Error::new(
                    ident.span(),
                    format!("unknown filter `{ident}`; expected `All`, or wrap an expression in parentheses"),
                ))
            }
        } else {
            Err(lookahead.error())
        }
    }
}

fn parse_names(input: ParseStream<'_>) -> Result<FilterAst> {
    let content;
    bracketed!(content in input);
    let items = Punctuated::<Lit, Token![,]>::parse_terminated(&content)?;
    let mut names = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Lit::Str(name) => names.push(name),
            other => {
                return Err(Error::new(
                    other.span(),
                    "name lists may only contain string literals",
                ))
            }
        }
    }
    Ok(FilterAst::Names(names))
}

fn parse_object(input: ParseStream<'_>) -> Result<FilterAst> {
    let content;
    braced!(content in input);
    let mut seen = HashSet::new();
    let mut fields = Vec::new();
    while !content.is_empty() {
        let key = parse_key(&content)?;
        if !seen.insert(key.value()) {
            return Err(Error::new(
                key.span(),
                format!("duplicate key `{}` in filter object", key.value()),
            ));
        }
        content.parse::<Token![:]>()?;
        let filter = content.parse()?;
        fields.push((key, filter));
        if content.is_empty() {
            break;
        }
        content.parse::<Token![,]>()?;
    }
    Ok(FilterAst::Object(fields))
}

fn parse_key(input: ParseStream<'_>) -> Result<LitStr> {
    if input.peek(LitStr) {
        return input.parse();
    }
    let ident = input.call(Ident::parse_any)?;
    Ok(LitStr::new(&ident.unraw().to_string(), ident.span()))
}

fn parse_matcher(input: ParseStream<'_>) -> Result<FilterAst> {
    input.parse::<Token![match]>()?;
    let content;
    parenthesized!(content in input);
    let pattern: LitStr = content.parse()?;
    if let Err(err) = Regex::new(&pattern.value()) {
        return Err(Error::new(
            pattern.span(),
            format!("invalid key pattern: {err}"),
        ));
    }
    let mut filters = Vec::new();
    while !content.is_empty() {
        content.parse::<Token![,]>()?;
        if content.is_empty() {
            break;
        }
        filters.push(content.parse()?);
    }
    Ok(FilterAst::Matcher { pattern, filters })
}

#[cfg(test)]
mod tests {
    use quote::quote;

    use super::FilterAst;

    fn parse(tokens: proc_macro2::TokenStream) -> syn::Result<FilterAst> {
        syn::parse2(tokens)
    }

    #[test]
    fn all_is_parsed() {
        assert!(matches!(parse(quote! { All }).unwrap(), FilterAst::All));
    }

    #[test]
    fn names_are_parsed_in_order() {
        let FilterAst::Names(names) = parse(quote! { ["name", "age",] }).unwrap() else {
            panic!("expected names");
        };
        let names: Vec<String> = names.iter().map(syn::LitStr::value).collect();
        assert_eq!(names, ["name", "age"]);
    }

    #[test]
    fn empty_names_are_allowed() {
        assert!(matches!(parse(quote! { [] }).unwrap(), FilterAst::Names(names) if names.is_empty()));
    }

    #[test]
    fn non_string_name_errors() {
        let err = parse(quote! { ["name", 3] }).unwrap_err();
        assert!(err.to_string().contains("string literals"));
    }

    #[test]
    fn object_keys_accept_idents_keywords_and_strings() {
        let FilterAst::Object(fields) =
            parse(quote! { { user: All, type: ["a"], r#loop: All, "x-y": {} } }).unwrap()
        else {
            panic!("expected object");
        };
        let keys: Vec<String> = fields.iter().map(|(key, _)| key.value()).collect();
        assert_eq!(keys, ["user", "type", "loop", "x-y"]);
    }

    #[test]
    fn duplicate_object_key_errors() {
        let err = parse(quote! { { user: All, "user": ["a"] } }).unwrap_err();
        assert!(err.to_string().contains("duplicate key `user`"));
    }

    #[test]
    fn matcher_collects_sub_filters() {
        let FilterAst::Matcher { pattern, filters } =
            parse(quote! { match("^user", All, ["a"],) }).unwrap()
        else {
            panic!("expected matcher");
        };
        assert_eq!(pattern.value(), "^user");
        assert_eq!(filters.len(), 2);
    }

    #[test]
    fn matcher_without_sub_filters() {
        let parsed = parse(quote! { match("Profile$") }).unwrap();
        assert!(matches!(parsed, FilterAst::Matcher { filters, .. } if filters.is_empty()));
    }

    #[test]
    fn invalid_pattern_errors() {
        let err = parse(quote! { match("(unclosed") }).unwrap_err();
        assert!(err.to_string().contains("invalid key pattern"));
    }

    #[test]
    fn parenthesized_expression_is_embedded() {
        assert!(matches!(
            parse(quote! { (make_filter()) }).unwrap(),
            FilterAst::Expr(_)
        ));
    }

    #[test]
    fn unknown_identifier_errors() {
        let err = parse(quote! { Everything }).unwrap_err();
        assert!(err.to_string().contains("unknown filter `Everything`"));
    }

    #[test]
    fn trailing_tokens_error() {
        assert!(parse(quote! { All All }).is_err());
    }
}
