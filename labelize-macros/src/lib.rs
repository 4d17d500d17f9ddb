mod label;

use proc_macro::TokenStream;
use proc_macro_crate::crate_name;
use quote::quote;
use syn::parse_macro_input;

use crate::label::label_declaration_to_tokens;

/// Declare one or more labels pointing into an association.
///
/// A label is a named, single-valued association stored in a foreign key
/// field on the declaring model itself. The macro is invoked inside an
/// inherent `impl` block of the declaring model and generates, for each
/// label, an async getter, a setter, and a `LabelDefinition` constant.
///
/// The first argument is the association name: the plural, snake_case name
/// of the collection the label points into, optionally prefixed with a module
/// path. The target type is the singular form of that name in UpperCamelCase
/// (`employees` resolves to `Employee`, `hr::contractors` to
/// `hr::Contractor`).
///
/// The only supported option is `as`, which takes a label name or a list of
/// them. Label names can be identifiers or string literals. If `as` is
/// omitted, a single label named after the singular association name is
/// declared.
///
/// For each label `x`, the declaring struct must have an
/// `x_id: Option<Identifier>` field.
///
/// ```
/// use labelize::{Identifier, LabelTarget, label_one_of_many};
///
/// struct Employee {
///     id: i64,
/// }
///
/// impl LabelTarget for Employee {
///     fn primary_key(&self) -> Identifier {
///         Identifier::from(self.id)
///     }
/// }
///
/// #[derive(Default)]
/// struct Company {
///     president_id: Option<Identifier>,
///     manager_id: Option<Identifier>,
///     employee_id: Option<Identifier>,
/// }
///
/// impl Company {
///     label_one_of_many!(employees, as = [president, "manager"]);
///     label_one_of_many!(employees);
/// }
///
/// let mut company = Company::default();
/// company.set_president(&Employee { id: 1 });
/// company.set_manager(Identifier::from("2"));
///
/// assert_eq!(company.president_id, Some(Identifier::Integer(1)));
/// assert_eq!(company.manager_id, Some(Identifier::from("2")));
/// assert_eq!(Company::EMPLOYEE_LABEL.column(), "employee_id");
/// ```
#[proc_macro]
pub fn label_one_of_many(input: TokenStream) -> TokenStream {
    let declaration = parse_macro_input!(input as labelize_codegen::label::LabelDeclaration);
    label_declaration_to_tokens(&declaration)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

pub(crate) fn labelize_ident() -> syn::Result<proc_macro2::TokenStream> {
    let labelize_crate = crate_name("labelize").map_err(|error| {
        syn::Error::new(
            proc_macro2::Span::call_site(),
            format!("labelize is not present in `Cargo.toml`: {error}"),
        )
    })?;
    let path = match labelize_crate {
        proc_macro_crate::FoundCrate::Itself => {
            quote! { ::labelize }
        }
        proc_macro_crate::FoundCrate::Name(name) => {
            let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
            quote! { ::#ident }
        }
    };
    Ok(path)
}
