use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

/// Derive macro that exposes a model record (its validated inputs or its
/// computed outputs) as an ordered list of named values.
///
/// Entries appear in field declaration order. Supported field types are
/// `f64`, `u32`, `u64` and `Option<f64>`; `None` optionals are left out of
/// the entries but still listed by `field_names()`.
///
/// Field attributes:
/// - `#[record(name = "Yderm")]` reports the field under a different name
///   (default: the field identifier).
/// - `#[record(flatten)]` splices the entries of a nested `Record` in place.
///
/// The generated impl refers to `::cloet_core`, so the deriving crate must
/// depend on `cloet-core`.
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return syn::Error::new_spanned(
                    name,
                    "Record can only be derived for structs with named fields",
                )
                .to_compile_error()
                .into();
            }
        },
        _ => {
            return syn::Error::new_spanned(name, "Record can only be derived for structs")
                .to_compile_error()
                .into();
        }
    };

    if fields.is_empty() {
        return syn::Error::new_spanned(name, "Record struct must have at least one field")
            .to_compile_error()
            .into();
    }

    let mut name_pushes = Vec::new();
    let mut entry_pushes = Vec::new();

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = match parse_field_attrs(field) {
            Ok(attrs) => attrs,
            Err(err) => return err.to_compile_error().into(),
        };
        let ty = &field.ty;

        if attrs.flatten {
            name_pushes.push(quote! {
                names.extend(<#ty as ::cloet_core::record::Record>::field_names());
            });
            entry_pushes.push(quote! {
                entries.extend(::cloet_core::record::Record::entries(&self.#ident));
            });
            continue;
        }

        let reported = attrs.name.unwrap_or_else(|| ident.to_string());
        name_pushes.push(quote! { names.push(#reported); });

        let push = match classify(ty) {
            Some(FieldKind::Float) => quote! {
                entries.push((#reported, ::cloet_core::value::Value::Float(self.#ident)));
            },
            Some(FieldKind::SmallInt) => quote! {
                entries.push((
                    #reported,
                    ::cloet_core::value::Value::Int(::core::primitive::u64::from(self.#ident)),
                ));
            },
            Some(FieldKind::Int) => quote! {
                entries.push((#reported, ::cloet_core::value::Value::Int(self.#ident)));
            },
            Some(FieldKind::OptionalFloat) => quote! {
                if let ::core::option::Option::Some(value) = self.#ident {
                    entries.push((#reported, ::cloet_core::value::Value::Float(value)));
                }
            },
            None => {
                return syn::Error::new_spanned(
                    ty,
                    "Record derive: fields must be f64, u32, u64 or Option<f64>",
                )
                .to_compile_error()
                .into();
            }
        };
        entry_pushes.push(push);
    }

    let expanded = quote! {
        impl #impl_generics ::cloet_core::record::Record for #name #ty_generics #where_clause {
            fn field_names() -> ::std::vec::Vec<&'static str> {
                let mut names = ::std::vec::Vec::new();
                #(#name_pushes)*
                names
            }

            fn entries(&self) -> ::std::vec::Vec<(&'static str, ::cloet_core::value::Value)> {
                let mut entries = ::std::vec::Vec::new();
                #(#entry_pushes)*
                entries
            }
        }
    };

    expanded.into()
}

#[derive(Default)]
struct FieldAttrs {
    name: Option<String>,
    flatten: bool,
}

fn parse_field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();
    for attr in &field.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                attrs.name = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("flatten") {
                attrs.flatten = true;
                Ok(())
            } else {
                Err(meta.error("unsupported record attribute, expected `name` or `flatten`"))
            }
        })?;
    }
    Ok(attrs)
}

enum FieldKind {
    Float,
    SmallInt,
    Int,
    OptionalFloat,
}

fn classify(ty: &syn::Type) -> Option<FieldKind> {
    let syn::Type::Path(type_path) = ty else {
        return None;
    };
    let path = &type_path.path;
    if path.is_ident("f64") {
        return Some(FieldKind::Float);
    }
    if path.is_ident("u32") {
        return Some(FieldKind::SmallInt);
    }
    if path.is_ident("u64") {
        return Some(FieldKind::Int);
    }

    let last = path.segments.last()?;
    if last.ident != "Option" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    match args.args.first() {
        Some(syn::GenericArgument::Type(syn::Type::Path(inner)))
            if args.args.len() == 1 && inner.path.is_ident("f64") =>
        {
            Some(FieldKind::OptionalFloat)
        }
        _ => None,
    }
}
