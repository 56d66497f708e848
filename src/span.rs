//! Inclusive code point ranges as written in the first column of UCD range
//! files: either `HEX` or `HEX..HEX`.

use std::str::FromStr;

use quote::quote;

use crate::error::{Error, Result};

/// An inclusive range of code points, `low <= high` in well-formed input.
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
pub struct Span {
    pub low: u32,
    pub high: u32,
}

impl Span {
    pub fn new(low: u32, high: u32) -> Span {
        Span { low, high }
    }
}

/// Emits the two bounds as comma-separated hexadecimal literals, ready to be
/// spliced into a tuple or struct literal.
impl quote::ToTokens for Span {
    fn to_tokens(&self, tokens: &mut proc_macro2::TokenStream) {
        let low = hex_literal(self.low);
        let high = hex_literal(self.high);
        tokens.extend(quote! { #low, #high });
    }
}

fn hex_literal(value: u32) -> syn::LitInt {
    syn::LitInt::new(&format!("{:#06x}", value), proc_macro2::Span::call_site())
}

fn to_code_point(token: &str, span: &str) -> Result<u32> {
    // `from_str_radix` alone would let a leading `+` through.
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidSpan(span.to_string()));
    }
    u32::from_str_radix(token, 16).map_err(|_| Error::InvalidSpan(span.to_string()))
}

/// Parse a single code point `HEX` or a range `HEX..HEX` with `low <= high`.
pub fn parse_span(token: &str) -> Result<Span> {
    match token.find("..") {
        Some(index) if index > 0 => {
            let low = to_code_point(&token[..index], token)?;
            let high = to_code_point(&token[index + 2..], token)?;
            if low > high {
                return Err(Error::InvalidSpan(token.to_string()));
            }
            Ok(Span { low, high })
        }
        _ => {
            let code = to_code_point(token, token)?;
            Ok(Span {
                low: code,
                high: code,
            })
        }
    }
}

impl FromStr for Span {
    type Err = Error;

    fn from_str(s: &str) -> Result<Span> {
        parse_span(s)
    }
}

#[test]
fn single_code_point() {
    assert_eq!(parse_span("41").expect("hex"), Span::new(0x41, 0x41));
    assert_eq!(parse_span("1F600").expect("hex"), Span::new(0x1F600, 0x1F600));
}

#[test]
fn code_point_range() {
    assert_eq!(parse_span("41..5A").expect("hex"), Span::new(0x41, 0x5A));
    assert_eq!(
        "E0100..E01EF".parse::<Span>().expect("hex"),
        Span::new(0xE0100, 0xE01EF)
    );
}

#[test]
fn rejects_non_hex() {
    assert!(matches!(parse_span("zz"), Err(Error::InvalidSpan(_))));
    assert!(matches!(parse_span(""), Err(Error::InvalidSpan(_))));
    assert!(matches!(parse_span("41..xyz"), Err(Error::InvalidSpan(_))));
    assert!(matches!(parse_span("..5A"), Err(Error::InvalidSpan(_))));
    assert!(matches!(parse_span("+41"), Err(Error::InvalidSpan(_))));
    assert!(matches!(parse_span("41..+5A"), Err(Error::InvalidSpan(_))));
    assert!(matches!(parse_span("-41"), Err(Error::InvalidSpan(_))));
}

#[test]
fn rejects_reversed_range() {
    assert!(matches!(parse_span("5A..41"), Err(Error::InvalidSpan(_))));
    assert_eq!(parse_span("41..41").expect("hex"), Span::new(0x41, 0x41));
}

#[test]
fn span_tokens() {
    let tokens = quote::ToTokens::to_token_stream(&Span::new(0x41, 0x10FFFF));
    assert_eq!(tokens.to_string(), "0x0041 , 0x10ffff");
}
