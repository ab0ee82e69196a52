//! Attribute macros shared by the geotext crates.

mod args;

use args::ContextArgs;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::parse_macro_input;

/// Wraps the body of a function returning `anyhow::Result` so that any error leaving the
/// function carries an additional context line.
///
/// ```ignore
/// #[context("while parsing tag '{}'", tag)]
/// fn parse_tag(iter: &mut ByteIterator, tag: &str) -> Result<()> { ... }
/// ```
///
/// The arguments are passed to `format!` lazily, only on the error path. Prefix them with
/// `move,` to move captured values into the wrapped body.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let ContextArgs {
		move_token,
		format_args,
	} = parse_macro_input!(args);
	let mut input = parse_macro_input!(input as syn::ItemFn);

	if input.sig.asyncness.is_some() {
		return syn::Error::new_spanned(&input.sig, "#[context] does not support async functions")
			.to_compile_error()
			.into();
	}
	if matches!(input.sig.output, syn::ReturnType::Default) {
		return syn::Error::new_spanned(&input.sig, "#[context] requires a function returning Result")
			.to_compile_error()
			.into();
	}

	let body = &input.block;
	let return_type = &input.sig.output;
	let err = Ident::new("err", Span::mixed_site());
	let force_fn_once = Ident::new("force_fn_once", Span::mixed_site());

	// Moving a non-`Copy` value into the closure makes borrowck treat it as `FnOnce`.
	let new_body = quote! {
		let #force_fn_once = ::core::iter::empty::<()>();
		(#move_token || #return_type {
			::core::mem::drop(#force_fn_once);
			#body
		})().map_err(|#err| #err.context(format!(#format_args)).into())
	};
	input.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(new_body), None)];

	input.into_token_stream().into()
}
