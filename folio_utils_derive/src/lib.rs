use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemFn};

/// Instruments a function with a trace level span that also records the
/// return value.
///
/// Arguments are forwarded to [`tracing::instrument`], e.g.
/// `#[trace_instrument(skip(self))]`. Works for both sync and async functions.
#[proc_macro_attribute]
pub fn trace_instrument(meta: TokenStream, input: TokenStream) -> TokenStream {
    let meta = proc_macro2::TokenStream::from(meta);
    let ItemFn {
        attrs,
        vis,
        sig,
        block,
    } = parse_macro_input!(input as ItemFn);

    let separator = (!meta.is_empty()).then(|| quote!(,));

    quote! {
        #[::tracing::instrument(level = "trace", ret(level = "trace") #separator #meta)]
        #(#attrs)*
        #vis #sig {
            ::tracing::trace!("call");
            #block
        }
    }
    .into()
}
