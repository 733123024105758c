//! Shared utility functions for code generation.

/// Convert a dash-case string to PascalCase (e.g., "my-component" -> "MyComponent")
///
/// Only the first character of each segment is touched.
pub fn to_pascal_case(s: &str) -> String {
    s.split('-').map(capitalize).collect()
}

/// Uppercase the first character of a string (e.g., "myEvent" -> "MyEvent")
pub fn to_title_case(s: &str) -> String {
    capitalize(s)
}

/// Convert a string to dash-case (e.g., "MyComponent" -> "my-component")
///
/// Every uppercase letter and digit starts a new segment.
pub fn to_dash_case(s: &str) -> String {
    let mut spaced = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if c.is_ascii_uppercase() || c.is_ascii_digit() {
            spaced.push(' ');
        }
        spaced.push(c);
    }
    spaced
        .trim()
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Characters that never survive into a JS identifier.
const VAR_NAME_SEPARATORS: &[char] = &[
    '|', ';', '$', '%', '@', '"', '<', '>', '(', ')', '+', ',', '.', '{', '}', '_', '!', '/',
    '\\',
];

/// Derive a camelCase JS variable name from a file name or module specifier
/// (e.g., "./my-style.css?tag=x" -> "myStyleCss", "88mph" -> "_88mph").
///
/// Blank input yields an empty string.
pub fn create_js_var_name(name: &str) -> String {
    let name = name.split(['?', '#', '&', '=']).next().unwrap_or_default();
    let dashed = to_dash_case(name).replace(VAR_NAME_SEPARATORS, "-");
    let pascal = dash_to_pascal_case(&dashed);

    let mut chars = pascal.chars();
    let mut var_name: String = match chars.next() {
        None => return String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    };
    if var_name.starts_with(|c: char| c.is_ascii_digit()) {
        var_name.insert(0, '_');
    }
    var_name
}

fn dash_to_pascal_case(s: &str) -> String {
    s.to_lowercase().split('-').map(capitalize).collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("my-component"), "MyComponent");
        assert_eq!(to_pascal_case("a"), "A");
        assert_eq!(to_pascal_case("my-fancy-button"), "MyFancyButton");
        assert_eq!(to_pascal_case("x-iOS"), "XIOS");
        assert_eq!(to_pascal_case("a--b"), "AB");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_title_case() {
        assert_eq!(to_title_case("myEvent"), "MyEvent");
        assert_eq!(to_title_case("click"), "Click");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn test_to_dash_case() {
        assert_eq!(to_dash_case("MyComponent"), "my-component");
        assert_eq!(to_dash_case("myComponent"), "my-component");
        assert_eq!(to_dash_case("plain"), "plain");
        assert_eq!(to_dash_case("A  B"), "a-b");
    }

    #[test]
    fn test_create_js_var_name() {
        assert_eq!(
            create_js_var_name("./scoped-style-import.css?tag=my-button&encapsulation=scoped"),
            "scopedStyleImportCss"
        );
        assert_eq!(create_js_var_name("./scoped-style-import.css#hash"), "scopedStyleImportCss");
        assert_eq!(create_js_var_name("./scoped-style-import.css&data"), "scopedStyleImportCss");
        assert_eq!(create_js_var_name("./scoped-style-import.css=data"), "scopedStyleImportCss");
        assert_eq!(create_js_var_name("@ionic/core"), "ionicCore");
        assert_eq!(create_js_var_name("@ionic\\core"), "ionicCore");
        assert_eq!(create_js_var_name("88mph"), "_88mph");
        assert_eq!(create_js_var_name("Doc.brown&"), "docBrown");
        assert_eq!(create_js_var_name("  Doc!  Brown?  "), "docBrown");
        assert_eq!(create_js_var_name("doc---Brown"), "docBrown");
        assert_eq!(create_js_var_name("doc-brown"), "docBrown");
        assert_eq!(create_js_var_name("DocBrown"), "docBrown");
        assert_eq!(create_js_var_name("Doc"), "doc");
        assert_eq!(create_js_var_name("AB"), "aB");
        assert_eq!(create_js_var_name("Ab"), "ab");
        assert_eq!(create_js_var_name("A"), "a");
    }

    #[test]
    fn test_create_js_var_name_blank() {
        assert_eq!(create_js_var_name("    "), "");
        assert_eq!(create_js_var_name(""), "");
    }
}
