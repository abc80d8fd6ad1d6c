use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Generate a color model from a struct with exactly three named components.
///
/// The components are made public and the model gets a `const fn new`,
/// `to_components`, `map`, conversions from/to `Components` and `[Component; 3]`
/// and an implementation of `crate::models::Model` whose `NAME` is the
/// kebab-cased struct name (the CSS function name of the model). Models
/// serialize as a three element array.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 || !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Models must have exactly 3 named fields, one for each component of the color.");
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.");
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // Make sure the 3 specified fields are public.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attrs = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
            #[serde(
                from = "[crate::color::Component; 3]",
                into = "[crate::color::Component; 3]"
            )]
        })
        .unwrap();
    input.attrs.extend(attrs);

    let struct_name = input.ident.clone();
    let css_name = struct_name.to_string().to_case(Case::Kebab);

    let model_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model.
            pub const fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }

            /// Return a new model with each component mapped with the given
            /// function.
            pub fn map(&self, f: impl Fn(crate::color::Component) -> crate::color::Component) -> Self {
                Self::new(f(self.#field1), f(self.#field2), f(self.#field3))
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<[crate::color::Component; 3]> for #struct_name {
            fn from(value: [crate::color::Component; 3]) -> Self {
                Self::new(value[0], value[1], value[2])
            }
        }

        impl From<#struct_name> for [crate::color::Component; 3] {
            fn from(value: #struct_name) -> Self {
                [value.#field1, value.#field2, value.#field3]
            }
        }

        impl crate::models::Model for #struct_name {
            const NAME: &'static str = #css_name;

            fn to_components(&self) -> crate::color::Components {
                #struct_name::to_components(self)
            }
        }
    };

    quote! {
        #input
        #model_impl
    }
    .into()
}
