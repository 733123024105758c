use kiln_ir::Docs;

/// Render member docs as a single JSDoc body.
///
/// Line breaks inside the text and tag texts are flattened to spaces, each
/// block tag gets its own line, and `@internal` is dropped.
pub fn get_text_docs(docs: Option<&Docs>) -> String {
    let Some(docs) = docs else {
        return String::new();
    };

    let tags = docs
        .tags
        .iter()
        .filter(|tag| tag.name != "internal")
        .map(|tag| {
            format!(
                "@{} {}",
                tag.name,
                flatten_line_breaks(tag.text.as_deref().unwrap_or_default())
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!("{}\n{}", flatten_line_breaks(&docs.text), tags)
        .trim()
        .to_string()
}

fn flatten_line_breaks(text: &str) -> String {
    text.replace("\r\n", " ").replace(['\n', '\r'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_docs() {
        assert_eq!(get_text_docs(None), "");
        assert_eq!(get_text_docs(Some(&Docs::default())), "");
    }

    #[test]
    fn test_text_only() {
        let docs = Docs::new("The size\r\nof the\nbutton");
        assert_eq!(get_text_docs(Some(&docs)), "The size of the button");
    }

    #[test]
    fn test_tags_on_their_own_lines() {
        let docs = Docs::new("Opens the dialog")
            .with_tag("deprecated", Some("use show()\ninstead"))
            .with_tag("internal", None)
            .with_tag("since", None);

        assert_eq!(
            get_text_docs(Some(&docs)),
            "Opens the dialog\n@deprecated use show() instead\n@since"
        );
    }
}
