use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr};

pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => TokenStream::from(tokens),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

#[derive(Default)]
struct RecordAttrs {
    name: Option<String>,
    plural: Option<String>,
    route: Option<String>,
    file: Option<String>,
    delete: Option<LitStr>,
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;
    let attrs = extract_record_attrs(input)?;

    let fields = named_fields(input)?;
    let id_field = extract_id_field(input, &fields)?;
    let patched: Vec<&Ident> = fields.iter().filter(|f| **f != id_field).collect();

    let name = attrs.name.unwrap_or_else(|| ident.to_string());
    let plural = attrs.plural.unwrap_or_else(|| format!("{}s", name));
    let route = attrs.route.unwrap_or_else(|| plural.to_lowercase());
    let file = attrs
        .file
        .unwrap_or_else(|| format!("{}.json", to_lower_camel(&plural)));

    let delete_reply = match &attrs.delete {
        None => None,
        Some(lit) => match lit.value().as_str() {
            "remaining" => Some(quote! { recordstore::DeleteReply::Remaining }),
            "no_content" => Some(quote! { recordstore::DeleteReply::NoContent }),
            other => {
                return Err(syn::Error::new(
                    lit.span(),
                    format!(
                        "unknown delete reply `{}`, expected \"remaining\" or \"no_content\"",
                        other
                    ),
                ))
            }
        },
    };
    let delete_const = delete_reply.map(|reply| {
        quote! { const DELETE_REPLY: recordstore::DeleteReply = #reply; }
    });

    Ok(quote! {
        impl recordstore::Record for #ident {
            const NAME: &'static str = #name;
            const PLURAL: &'static str = #plural;
            const ROUTE: &'static str = #route;
            const FILE: &'static str = #file;
            #delete_const

            fn id(&self) -> recordstore::RecordId {
                self.#id_field
            }

            fn set_id(&mut self, id: recordstore::RecordId) {
                self.#id_field = id;
            }

            fn apply(&mut self, patch: Self) {
                #( self.#patched = patch.#patched; )*
            }
        }
    })
}

fn extract_record_attrs(input: &DeriveInput) -> syn::Result<RecordAttrs> {
    let mut attrs = RecordAttrs::default();
    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("delete") {
                attrs.delete = Some(meta.value()?.parse()?);
                return Ok(());
            }

            let slot = if meta.path.is_ident("name") {
                &mut attrs.name
            } else if meta.path.is_ident("plural") {
                &mut attrs.plural
            } else if meta.path.is_ident("route") {
                &mut attrs.route
            } else if meta.path.is_ident("file") {
                &mut attrs.file
            } else {
                return Err(meta.error("unsupported record attribute"));
            };
            let value: LitStr = meta.value()?.parse()?;
            *slot = Some(value.value());
            Ok(())
        })?;
    }
    Ok(attrs)
}

fn named_fields(input: &DeriveInput) -> syn::Result<Vec<Ident>> {
    if let Data::Struct(data_struct) = &input.data {
        if let Fields::Named(fields) = &data_struct.fields {
            return Ok(fields
                .named
                .iter()
                .filter_map(|field| field.ident.clone())
                .collect());
        }
    }
    Err(syn::Error::new(
        Span::call_site(),
        "Record derive: only structs with named fields are supported",
    ))
}

fn extract_id_field(input: &DeriveInput, names: &[Ident]) -> syn::Result<Ident> {
    if let Data::Struct(data_struct) = &input.data {
        for field in &data_struct.fields {
            for attr in &field.attrs {
                if !attr.path().is_ident("record") {
                    continue;
                }
                let mut is_id = false;
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("id") {
                        is_id = true;
                        Ok(())
                    } else {
                        Err(meta.error("unsupported record field attribute"))
                    }
                })?;
                if is_id {
                    if let Some(ident) = &field.ident {
                        return Ok(ident.clone());
                    }
                }
            }
        }
    }

    // Default: look for a field named "id"
    names.iter().find(|ident| *ident == "id").cloned().ok_or_else(|| {
        syn::Error::new(
            Span::call_site(),
            "Record derive: no field marked with #[record(id)] and no field named `id`",
        )
    })
}

fn to_lower_camel(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
