//! English inflection for association names.
//!
//! Association names are plural, snake_case collection names (`employees`,
//! `job_titles`). Labels default to their singular form and target types to
//! the singular form in UpperCamelCase. Only the last `_`-separated word of a
//! compound name is inflected.

use heck::ToUpperCamelCase;

const UNCOUNTABLE: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
    "news",
    "staff",
    "metadata",
];

const IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("women", "woman"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("data", "datum"),
    ("media", "medium"),
    ("criteria", "criterion"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("diagnoses", "diagnosis"),
    ("statuses", "status"),
    ("aliases", "alias"),
    ("buses", "bus"),
    ("viruses", "virus"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("lives", "life"),
    ("leaves", "leaf"),
    ("movies", "movie"),
    ("shoes", "shoe"),
];

/// Returns the singular form of a plural snake_case name.
///
/// # Examples
///
/// ```
/// use labelize_codegen::inflect::singularize;
///
/// assert_eq!(singularize("employees"), "employee");
/// assert_eq!(singularize("companies"), "company");
/// assert_eq!(singularize("job_titles"), "job_title");
/// assert_eq!(singularize("people"), "person");
/// ```
#[must_use]
pub fn singularize(name: &str) -> String {
    let (prefix, word) = match name.rfind('_') {
        Some(index) => name.split_at(index + 1),
        None => ("", name),
    };

    format!("{prefix}{}", singularize_word(word))
}

/// Returns the type name for a plural snake_case association name.
///
/// # Examples
///
/// ```
/// use labelize_codegen::inflect::classify;
///
/// assert_eq!(classify("employees"), "Employee");
/// assert_eq!(classify("job_titles"), "JobTitle");
/// ```
#[must_use]
pub fn classify(name: &str) -> String {
    singularize(name).to_upper_camel_case()
}

fn singularize_word(word: &str) -> String {
    let word = word.to_lowercase();

    if word.is_empty() || UNCOUNTABLE.contains(&word.as_str()) {
        return word;
    }
    if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == word) {
        return (*singular).to_owned();
    }

    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word;
    }
    if let Some(stem) = word.strip_suffix("ies").filter(|stem| !stem.is_empty()) {
        return format!("{stem}y");
    }
    if word.ends_with("lves") || word.ends_with("rves") {
        return format!("{}f", &word[..word.len() - 3]);
    }
    if ["sses", "xes", "ches", "shes", "zzes", "oes"]
        .iter()
        .any(|suffix| word.ends_with(suffix))
    {
        return word[..word.len() - 2].to_owned();
    }
    if let Some(stem) = word.strip_suffix('s') {
        return stem.to_owned();
    }

    word
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals() {
        assert_eq!(singularize("employees"), "employee");
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("contractors"), "contractor");
    }

    #[test]
    fn suffix_rules() {
        assert_eq!(singularize("companies"), "company");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("branches"), "branch");
        assert_eq!(singularize("dishes"), "dish");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("heroes"), "hero");
        assert_eq!(singularize("wolves"), "wolf");
        assert_eq!(singularize("shelves"), "shelf");
        assert_eq!(singularize("houses"), "house");
        assert_eq!(singularize("archives"), "archive");
    }

    #[test]
    fn irregular_nouns() {
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("children"), "child");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("knives"), "knife");
        assert_eq!(singularize("movies"), "movie");
    }

    #[test]
    fn uncountable_nouns() {
        assert_eq!(singularize("sheep"), "sheep");
        assert_eq!(singularize("series"), "series");
        assert_eq!(singularize("staff"), "staff");
    }

    #[test]
    fn already_singular() {
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("address"), "address");
        assert_eq!(singularize("analysis"), "analysis");
        assert_eq!(singularize("employee"), "employee");
    }

    #[test]
    fn compound_names() {
        assert_eq!(singularize("job_titles"), "job_title");
        assert_eq!(singularize("sales_people"), "sales_person");
        assert_eq!(singularize("news_categories"), "news_category");
    }

    #[test]
    fn classify_names() {
        assert_eq!(classify("employees"), "Employee");
        assert_eq!(classify("job_titles"), "JobTitle");
        assert_eq!(classify("people"), "Person");
        assert_eq!(classify("companies"), "Company");
    }
}
