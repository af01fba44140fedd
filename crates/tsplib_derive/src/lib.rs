mod tsplib_token;

use proc_macro::TokenStream;

/// Maps unit enum variants to TSPLIB tokens.
///
/// Generates `Display`, `FromStr` (erroring through `crate::Error`), and the
/// `TOKENS` / `ALL` constants in declaration order.
#[proc_macro_derive(TsplibToken, attributes(tsplib))]
pub fn derive_tsplib_token(input: TokenStream) -> TokenStream {
    tsplib_token::derive_tsplib_token_inner(input)
}
