use std::collections::HashSet;

use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Token, bracketed};

/// The only option recognized by a label declaration.
pub const AS_OPTION: &str = "as";

/// A parsed `label_one_of_many!` invocation.
///
/// ```text
/// label_one_of_many!(employees, as = [president, "manager"])
/// ```
#[derive(Debug, Clone)]
pub struct LabelDeclaration {
    pub association: Association,
    pub options: LabelOptions,
}

impl Parse for LabelDeclaration {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let association = input.parse()?;
        let options = if input.is_empty() {
            LabelOptions::default()
        } else {
            input.parse::<Token![,]>()?;
            input.parse()?
        };

        Ok(Self {
            association,
            options,
        })
    }
}

impl LabelDeclaration {
    /// Returns the names of the labels to define, in declaration order.
    ///
    /// If the `as` option was omitted, this is a single label named after
    /// the singular form of the association.
    #[must_use]
    pub fn label_names(&self) -> Vec<LabelName> {
        if self.options.labels.is_none() {
            return vec![LabelName::new(
                self.association.singular_name(),
                self.association.span(),
            )];
        }

        get_labels(self.options.labels.as_ref())
    }

    /// Validates the label names and turns them into label definitions.
    ///
    /// Labels repeated within the declaration are defined once.
    ///
    /// # Errors
    ///
    /// Returns an error if no type name can be derived from the association,
    /// or if any label name is empty, is not a lower-case identifier, or is a
    /// Rust keyword.
    pub fn definitions(&self) -> syn::Result<Vec<LabelDefinition>> {
        let association = self.association.name();
        let target = self.association.target_type()?;
        let mut seen = HashSet::new();

        let mut definitions = Vec::new();
        for name in self.label_names() {
            let label = name.to_ident()?;
            if !seen.insert(name.value().to_owned()) {
                continue;
            }

            definitions.push(LabelDefinition {
                column: syn::Ident::new(&format!("{label}_id"), label.span()),
                label,
                association: association.clone(),
                target: target.clone(),
            });
        }

        Ok(definitions)
    }
}

/// The association a label points into: a plural collection name,
/// optionally prefixed with a module path (`hr::contractors`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Association {
    path: syn::Path,
    ident: syn::Ident,
}

impl Parse for Association {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let span = input.span();
        let path = input.call(syn::Path::parse_mod_style)?;
        let Some(last) = path.segments.last() else {
            return Err(syn::Error::new(span, "expected an association name"));
        };
        let ident = last.ident.clone();

        Ok(Self { path, ident })
    }
}

impl Association {
    /// The collection name, without the module path.
    #[must_use]
    pub fn name(&self) -> String {
        self.ident.unraw().to_string()
    }

    #[must_use]
    pub fn singular_name(&self) -> String {
        crate::inflect::singularize(&self.name())
    }

    /// The path of the type records of this association are stored as.
    ///
    /// The module path is kept; the collection name is replaced with its
    /// singular, UpperCamelCase form.
    ///
    /// # Errors
    ///
    /// Returns an error if that form is not a valid type name, e.g. for an
    /// association named `s`.
    pub fn target_type(&self) -> syn::Result<syn::Path> {
        let name = self.name();
        let type_name = crate::inflect::classify(&name);
        if syn::parse_str::<syn::Ident>(&type_name).is_err() {
            return Err(syn::Error::new(
                self.span(),
                format!("cannot derive a type name from association `{name}`"),
            ));
        }

        let mut path = self.path.clone();
        if let Some(last) = path.segments.last_mut() {
            last.ident = syn::Ident::new(&type_name, self.span());
        }
        Ok(path)
    }

    #[must_use]
    pub fn span(&self) -> Span {
        self.ident.span()
    }
}

/// The options of a label declaration.
#[derive(Debug, Clone, Default)]
pub struct LabelOptions {
    /// The value of the `as` option, if given.
    pub labels: Option<LabelIds>,
}

impl Parse for LabelOptions {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let options = Punctuated::<LabelOption, Token![,]>::parse_terminated(input)?;

        let mut labels = None;
        for option in options {
            if labels.is_some() {
                return Err(syn::Error::new(
                    option.key.span(),
                    format!("duplicate option `{AS_OPTION}`"),
                ));
            }
            labels = Some(option.value);
        }

        Ok(Self { labels })
    }
}

#[derive(Debug, Clone)]
struct LabelOption {
    key: syn::Ident,
    value: LabelIds,
}

impl Parse for LabelOption {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let key = input.call(syn::Ident::parse_any)?;
        if key != AS_OPTION {
            return Err(invalid_option(&key));
        }
        input.parse::<Token![=]>()?;
        let value = input.parse()?;

        Ok(Self { key, value })
    }
}

/// Creates the error reported for an option other than `as`.
#[must_use]
pub fn invalid_option(key: &syn::Ident) -> syn::Error {
    syn::Error::new(
        key.span(),
        format!("unknown option `{key}`; the only supported option is `{AS_OPTION}`"),
    )
}

/// The value of the `as` option: a single label name or a list of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelIds {
    Name(LabelName),
    List(Vec<LabelName>),
}

impl Parse for LabelIds {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        if input.peek(syn::token::Bracket) {
            let content;
            bracketed!(content in input);
            let names = Punctuated::<LabelName, Token![,]>::parse_terminated(&content)?;
            Ok(Self::List(names.into_iter().collect()))
        } else {
            Ok(Self::Name(input.parse()?))
        }
    }
}

impl LabelIds {
    /// The label names; a single name is treated as a one-element list.
    #[must_use]
    pub fn names(&self) -> &[LabelName] {
        match self {
            Self::Name(name) => std::slice::from_ref(name),
            Self::List(names) => names,
        }
    }
}

/// A label name, given either as a bare identifier or as a string literal.
#[derive(Debug, Clone)]
pub struct LabelName {
    value: String,
    span: Span,
}

impl PartialEq for LabelName {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for LabelName {}

impl Parse for LabelName {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let lookahead = input.lookahead1();
        if lookahead.peek(syn::LitStr) {
            let lit: syn::LitStr = input.parse()?;
            Ok(Self::new(lit.value(), lit.span()))
        } else if lookahead.peek(syn::Ident) {
            let ident: syn::Ident = input.parse()?;
            Ok(Self::new(ident.unraw().to_string(), ident.span()))
        } else {
            Err(lookahead.error())
        }
    }
}

impl LabelName {
    #[must_use]
    pub fn new(value: impl Into<String>, span: Span) -> Self {
        Self {
            value: value.into(),
            span,
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn span(&self) -> Span {
        self.span
    }

    /// Converts the name into the identifier of the getter.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, is not a lower-case identifier,
    /// or is a Rust keyword.
    pub fn to_ident(&self) -> syn::Result<syn::Ident> {
        let value = &self.value;
        if value.is_empty() {
            return Err(syn::Error::new(self.span, "label names must not be empty"));
        }

        let lower_snake_case = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
            && !value.starts_with(|c: char| c.is_ascii_digit());
        if !lower_snake_case {
            return Err(syn::Error::new(
                self.span,
                format!("invalid label name `{value}`; label names must be lower-case identifiers"),
            ));
        }

        if syn::parse_str::<syn::Ident>(value).is_err() {
            return Err(syn::Error::new(
                self.span,
                format!("invalid label name `{value}`; label names cannot be Rust keywords"),
            ));
        }

        Ok(syn::Ident::new(value, self.span))
    }
}

/// Normalizes the value of the `as` option into a list of label names.
///
/// An absent value yields no labels, a single name yields a one-element
/// list, and a list is returned in order with duplicates kept. Use
/// [`LabelName::value`] for the string form of each name.
#[must_use]
pub fn get_labels(label_ids: Option<&LabelIds>) -> Vec<LabelName> {
    label_ids.map(LabelIds::names).unwrap_or_default().to_vec()
}

/// A single label to generate accessors for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDefinition {
    /// The getter name.
    pub label: syn::Ident,
    /// The foreign key field, `<label>_id`.
    pub column: syn::Ident,
    /// The association name, as written in the declaration.
    pub association: String,
    /// The path of the target type.
    pub target: syn::Path,
}

impl LabelDefinition {
    /// The target type path as a string, e.g. `hr::Contractor`.
    #[must_use]
    pub fn target_name(&self) -> String {
        let segments: Vec<_> = self
            .target
            .segments
            .iter()
            .map(|segment| segment.ident.to_string())
            .collect();
        let prefix = if self.target.leading_colon.is_some() {
            "::"
        } else {
            ""
        };

        format!("{prefix}{}", segments.join("::"))
    }
}
