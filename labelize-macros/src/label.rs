use heck::ToShoutySnakeCase;
use labelize_codegen::label::{LabelDeclaration, LabelDefinition};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use crate::labelize_ident;

pub(super) fn label_declaration_to_tokens(
    declaration: &LabelDeclaration,
) -> syn::Result<TokenStream> {
    let labelize = labelize_ident()?;
    let accessors = declaration
        .definitions()?
        .iter()
        .map(|definition| accessor_pair(&labelize, definition))
        .collect::<Vec<_>>();

    Ok(quote! {
        #(#accessors)*
    })
}

fn accessor_pair(labelize: &TokenStream, definition: &LabelDefinition) -> TokenStream {
    let label = &definition.label;
    let column = &definition.column;
    let target = &definition.target;
    let association = &definition.association;
    let setter = format_ident!("set_{}", label);
    let definition_const = format_ident!("{}_LABEL", label.to_string().to_shouty_snake_case());

    let label_name = label.to_string();
    let column_name = column.to_string();
    let target_name = definition.target_name();

    let definition_doc = format!(
        "The `{label_name}` label: a `{target_name}` from `{association}`, \
        stored in the `{column_name}` foreign key."
    );
    let getter_doc = format!(
        "Returns the `{target_name}` labelled as `{label_name}`.\n\n\
        Returns [`None`] if `{column_name}` is not set. If `{column_name}` \
        no longer refers to an existing record, it is cleared and [`None`] is \
        returned.\n\n\
        # Errors\n\n\
        Returns an error if looking the record up in the store fails."
    );
    let setter_doc = format!(
        "Labels a `{target_name}` as `{label_name}`.\n\n\
        Accepts either a record or its identifier; the identifier is stored \
        in `{column_name}`."
    );

    quote! {
        #[doc = #definition_doc]
        pub const #definition_const: #labelize::LabelDefinition = #labelize::LabelDefinition::new(
            #label_name,
            #column_name,
            #association,
            #target_name,
        );

        #[doc = #getter_doc]
        pub async fn #label<S>(
            &mut self,
            store: &S,
        ) -> #labelize::Result<::core::option::Option<#target>>
        where
            S: #labelize::RecordStore<#target> + ?Sized,
        {
            #labelize::resolve_label(&mut self.#column, store, #label_name).await
        }

        #[doc = #setter_doc]
        pub fn #setter<'a>(
            &mut self,
            value: impl ::core::convert::Into<#labelize::LabelValue<'a, #target>>,
        ) {
            #labelize::assign_label(&mut self.#column, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn generates_accessors_for_each_label() {
        let declaration: LabelDeclaration = parse_quote!(employees, as = [president, "manager"]);
        let tokens = label_declaration_to_tokens(&declaration).unwrap().to_string();

        assert!(tokens.contains("pub async fn president"));
        assert!(tokens.contains("pub fn set_president"));
        assert!(tokens.contains("pub const PRESIDENT_LABEL"));
        assert!(tokens.contains("pub async fn manager"));
        assert!(tokens.contains("pub fn set_manager"));
        assert!(tokens.contains("self . president_id"));
        assert!(tokens.contains("self . manager_id"));
    }

    #[test]
    fn empty_label_list_generates_nothing() {
        let declaration: LabelDeclaration = parse_quote!(employees, as = []);
        let tokens = label_declaration_to_tokens(&declaration).unwrap();

        assert!(tokens.is_empty());
    }

    #[test]
    fn association_without_type_name_is_an_error() {
        let declaration: LabelDeclaration = parse_quote!(s, as = auditor);

        assert!(label_declaration_to_tokens(&declaration).is_err());
    }

    #[test]
    fn invalid_label_is_an_error() {
        let declaration: LabelDeclaration = parse_quote!(employees, as = "Manager");

        assert!(label_declaration_to_tokens(&declaration).is_err());
    }
}
