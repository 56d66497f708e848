//! Render range tables and value enums as Rust items, for runtime crates
//! written in Rust rather than C.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::aliases::{fourcc_to_int, ScriptAlias, WidthName};
use crate::error::{Error, Result};
use crate::field::Field;

/// Convert a UCD long name (`Old_Italic`) into an enum variant (`OldItalic`).
pub fn variant_ident(name: &str) -> Result<syn::Ident> {
    let camel = name
        .split(|c: char| c == '_' || c == '-' || c == ' ')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<String>();
    syn::parse_str::<syn::Ident>(&camel).map_err(|_| Error::InvalidIdentifier(name.to_string()))
}

/// `#[repr(u32)] pub enum <enum_name> { Latin = 0x4c61746e, ... }`
pub fn script_enum_tokens(enum_name: &str, scripts: &[ScriptAlias]) -> Result<TokenStream> {
    let enum_ident = format_ident!("{}", enum_name);
    let variants = scripts
        .iter()
        .map(|script| {
            let ident = variant_ident(&script.name)?;
            let tag = syn::LitInt::new(
                &format!("{:#010x}", fourcc_to_int(&script.fourcc)?),
                proc_macro2::Span::call_site(),
            );
            Ok(quote! { #ident = #tag })
        })
        .collect::<Result<Vec<TokenStream>>>()?;

    Ok(quote! {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        #[repr(u32)]
        pub enum #enum_ident {
            #(#variants,)*
        }
    })
}

/// `pub enum <enum_name> { Ambiguous, Fullwidth, ... }`
pub fn width_enum_tokens(enum_name: &str, widths: &[WidthName]) -> Result<TokenStream> {
    let enum_ident = format_ident!("{}", enum_name);
    let variants = widths
        .iter()
        .map(|width| variant_ident(&width.long))
        .collect::<Result<Vec<syn::Ident>>>()?;

    Ok(quote! {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
        pub enum #enum_ident {
            #(#variants,)*
        }
    })
}

/// `pub static <TABLE>: &[(u32, u32, <enum_name>)] = &[(low, high, <enum_name>::Value), ...];`
///
/// `value_name` maps each field's first property to the long name its
/// variant is derived from.
pub fn range_table_tokens<F>(
    table_name: &str,
    enum_name: &str,
    fields: &[Field],
    value_name: F,
) -> Result<TokenStream>
where
    F: Fn(&str) -> Result<String>,
{
    let table_ident = format_ident!("{}", table_name.to_uppercase());
    let enum_ident = format_ident!("{}", enum_name);
    let rows = fields
        .iter()
        .map(|field| {
            let span = field.span;
            let variant = variant_ident(&value_name(field.property())?)?;
            Ok(quote! { (#span, #enum_ident::#variant) })
        })
        .collect::<Result<Vec<TokenStream>>>()?;

    let item: syn::ItemStatic = syn::parse_quote! {
        pub static #table_ident: &[(u32, u32, #enum_ident)] = &[
            #(#rows,)*
        ];
    };
    Ok(quote! { #item })
}

#[test]
fn variant_names() {
    assert_eq!(variant_ident("Latin").expect("ident").to_string(), "Latin");
    assert_eq!(
        variant_ident("Old_Italic").expect("ident").to_string(),
        "OldItalic"
    );
    assert_eq!(
        variant_ident("Katakana_Or_Hiragana").expect("ident").to_string(),
        "KatakanaOrHiragana"
    );
    assert!(matches!(
        variant_ident("1st"),
        Err(Error::InvalidIdentifier(_))
    ));
    assert!(matches!(variant_ident(""), Err(Error::InvalidIdentifier(_))));
    assert!(matches!(
        variant_ident("self"),
        Err(Error::InvalidIdentifier(_))
    ));
}

#[test]
fn script_enum_is_valid_rust() {
    let scripts = vec![
        ScriptAlias {
            name: "Latin".to_string(),
            fourcc: "Latn".to_string(),
            alias: None,
        },
        ScriptAlias {
            name: "Old_Italic".to_string(),
            fourcc: "Ital".to_string(),
            alias: None,
        },
    ];
    let tokens = script_enum_tokens("Script", &scripts).expect("valid scripts");
    let item: syn::ItemEnum = syn::parse2(tokens).expect("an enum item");
    assert_eq!(item.ident.to_string(), "Script");
    assert_eq!(item.variants.len(), 2);
    assert_eq!(item.variants[1].ident.to_string(), "OldItalic");
    let discriminant = &item.variants[0].discriminant.as_ref().expect("tag").1;
    assert_eq!(quote!(#discriminant).to_string(), "0x4c61746e");
}

#[test]
fn width_enum_is_valid_rust() {
    let widths = vec![
        WidthName {
            short: "A".to_string(),
            long: "Ambiguous".to_string(),
        },
        WidthName {
            short: "W".to_string(),
            long: "Wide".to_string(),
        },
    ];
    let tokens = width_enum_tokens("Width", &widths).expect("valid widths");
    let item: syn::ItemEnum = syn::parse2(tokens).expect("an enum item");
    let names = item
        .variants
        .iter()
        .map(|v| v.ident.to_string())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Ambiguous", "Wide"]);
}

#[test]
fn range_table_rows() {
    let fields = vec![
        Field::new(0x41, 0x5A, vec!["Latin"]),
        Field::new(0x370, 0x3FF, vec!["Greek"]),
    ];
    let tokens =
        range_table_tokens("sc_table", "Script", &fields, |name| Ok(name.to_string()))
            .expect("valid names");
    let item: syn::ItemStatic = syn::parse2(tokens.clone()).expect("a static item");
    assert_eq!(item.ident.to_string(), "SC_TABLE");

    let text = tokens.to_string();
    assert!(text.contains("(0x0041 , 0x005a , Script :: Latin)"), "{}", text);
    assert!(text.contains("(0x0370 , 0x03ff , Script :: Greek)"), "{}", text);
}

#[test]
fn range_table_translation_errors() {
    let fields = vec![Field::new(0x41, 0x5A, vec!["X"])];
    let result = range_table_tokens("ea_table", "Width", &fields, |name| {
        Err(Error::UnknownWidth(name.to_string()))
    });
    assert!(matches!(result, Err(Error::UnknownWidth(_))));
}
