use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, LitStr, parse_macro_input, spanned::Spanned};

const DEFAULT_SEPARATOR: &str = "_";

pub(crate) fn default_token(name: &str, separator: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(chars.len() * (separator.len().max(1) + 1));

    for (idx, ch) in chars.iter().copied().enumerate() {
        if idx > 0 {
            let prev = chars[idx - 1];
            let next = chars.get(idx + 1).copied();
            let is_word_boundary = ch.is_ascii_uppercase()
                && (prev.is_ascii_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase())));

            if is_word_boundary {
                out.push_str(separator);
            }
        }

        out.push(ch.to_ascii_uppercase());
    }

    out
}

struct ContainerAttrs {
    separator: String,
    field: String,
    error_ctor: Ident,
    ignore_case: bool,
    lowercase: bool,
}

fn parse_container_attrs(input: &DeriveInput) -> syn::Result<ContainerAttrs> {
    let mut attrs = ContainerAttrs {
        separator: DEFAULT_SEPARATOR.to_string(),
        field: default_token(&input.ident.to_string(), DEFAULT_SEPARATOR),
        error_ctor: format_ident!("invalid_value"),
        ignore_case: false,
        lowercase: false,
    };

    for attr in &input.attrs {
        if !attr.path().is_ident("tsplib") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("separator") {
                let lit: LitStr = meta.value()?.parse()?;
                attrs.separator = lit.value();
                return Ok(());
            }
            if meta.path.is_ident("field") {
                let lit: LitStr = meta.value()?.parse()?;
                attrs.field = lit.value();
                return Ok(());
            }
            if meta.path.is_ident("error") {
                let lit: LitStr = meta.value()?.parse()?;
                attrs.error_ctor = lit.parse()?;
                return Ok(());
            }
            if meta.path.is_ident("ignore_case") {
                attrs.ignore_case = true;
                return Ok(());
            }
            if meta.path.is_ident("lowercase") {
                attrs.lowercase = true;
                return Ok(());
            }

            Err(meta.error(
                "unsupported tsplib attribute on enum; expected separator, field, error, ignore_case or lowercase",
            ))
        })?;
    }

    Ok(attrs)
}

/// Canonical token first, aliases after.
fn parse_variant_tokens(variant: &syn::Variant, mut canonical: String) -> syn::Result<Vec<String>> {
    let mut aliases = Vec::new();

    for attr in &variant.attrs {
        if !attr.path().is_ident("tsplib") {
            continue;
        }

        if let Ok(lit) = attr.parse_args::<LitStr>() {
            canonical = lit.value();
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                canonical = lit.value();
                return Ok(());
            }
            if meta.path.is_ident("alias") {
                let lit: LitStr = meta.value()?.parse()?;
                aliases.push(lit.value());
                return Ok(());
            }
            Err(meta.error("unsupported tsplib attribute; expected \"...\" or name/alias"))
        })?;
    }

    let mut tokens = Vec::with_capacity(aliases.len() + 1);
    tokens.push(canonical);
    tokens.extend(aliases);
    Ok(tokens)
}

pub fn derive_tsplib_token_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let enum_ident = input.ident.clone();

    let attrs = match parse_container_attrs(&input) {
        Ok(value) => value,
        Err(err) => return err.to_compile_error().into(),
    };

    let Data::Enum(data_enum) = input.data else {
        return syn::Error::new(input.span(), "TsplibToken can only be derived for enums")
            .to_compile_error()
            .into();
    };

    let mut parse_arms = Vec::new();
    let mut display_arms = Vec::new();
    let mut canonical_lits = Vec::new();
    let mut variant_idents = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new(
                variant.span(),
                "TsplibToken only supports enums with unit variants",
            )
            .to_compile_error()
            .into();
        }

        let variant_ident = variant.ident.clone();
        let mut default = default_token(&variant_ident.to_string(), &attrs.separator);
        if attrs.lowercase {
            default = default.to_ascii_lowercase();
        }

        let tokens = match parse_variant_tokens(variant, default) {
            Ok(tokens) => tokens,
            Err(err) => return err.to_compile_error().into(),
        };

        let canonical_lit = LitStr::new(&tokens[0], Span::call_site());
        let patterns: Vec<LitStr> = tokens
            .iter()
            .map(|token| {
                if attrs.ignore_case {
                    LitStr::new(&token.to_ascii_lowercase(), Span::call_site())
                } else {
                    LitStr::new(token, Span::call_site())
                }
            })
            .collect();

        parse_arms.push(quote! {
            #(#patterns)|* => Ok(Self::#variant_ident),
        });
        display_arms.push(quote! {
            Self::#variant_ident => #canonical_lit,
        });
        canonical_lits.push(canonical_lit);
        variant_idents.push(variant_ident);
    }

    let scrutinee = if attrs.ignore_case {
        quote! { raw.to_ascii_lowercase().as_str() }
    } else {
        quote! { raw }
    };
    let field_lit = LitStr::new(&attrs.field, Span::call_site());
    let error_ctor = attrs.error_ctor;

    let expanded = quote! {
        impl #enum_ident {
            /// Canonical tokens in declaration order.
            pub const TOKENS: &'static [&'static str] = &[#(#canonical_lits),*];
            /// Every variant in declaration order.
            pub const ALL: &'static [Self] = &[#(Self::#variant_idents),*];
        }

        impl std::fmt::Display for #enum_ident {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let value = match self {
                    #(#display_arms)*
                };
                write!(f, "{value}")
            }
        }

        impl std::str::FromStr for #enum_ident {
            type Err = crate::Error;

            fn from_str(raw: &str) -> std::result::Result<Self, Self::Err> {
                match #scrutinee {
                    #(#parse_arms)*
                    _ => Err(crate::Error::#error_ctor(#field_lit, raw, Self::TOKENS)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}
