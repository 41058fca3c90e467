use crate::core::errors::LastfmError;
use roxmltree::{Document, Node};

/// How a step relates to the step before it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Combinator {
    /// `a b`: b anywhere below a
    Descendant,
    /// `a > b`: b directly below a
    Child,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    combinator: Combinator,
    tag: String,
}

impl Step {
    fn matches(&self, node: Node<'_, '_>) -> bool {
        node.is_element() && (self.tag == "*" || node.tag_name().name() == self.tag)
    }
}

/// Compiled tag path such as `"toptags > tag name"`
///
/// Whitespace separates descendant steps, `>` separates child steps. The
/// first step may match any element, the root included. `*` matches any tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    steps: Vec<Step>,
}

impl Selector {
    pub fn parse(selector: &str) -> Result<Self, LastfmError> {
        let invalid = |reason: &str| {
            LastfmError::InvalidParameters(format!("invalid selector '{}': {}", selector, reason))
        };

        let spaced = selector.replace('>', " > ");
        let mut steps = Vec::new();
        let mut pending_child = false;

        for token in spaced.split_whitespace() {
            if token == ">" {
                if steps.is_empty() {
                    return Err(invalid("starts with '>'"));
                }
                if pending_child {
                    return Err(invalid("repeated '>'"));
                }
                pending_child = true;
                continue;
            }

            let combinator = if pending_child {
                Combinator::Child
            } else {
                Combinator::Descendant
            };
            pending_child = false;
            steps.push(Step {
                combinator,
                tag: token.to_string(),
            });
        }

        if steps.is_empty() {
            return Err(invalid("empty"));
        }
        if pending_child {
            return Err(invalid("ends with '>'"));
        }

        Ok(Self { steps })
    }

    /// All matching elements, in document order
    pub fn select<'a, 'input>(&self, doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
        doc.descendants()
            .filter(|node| self.matches_at(*node, self.steps.len() - 1))
            .collect()
    }

    fn matches_at(&self, node: Node<'_, '_>, index: usize) -> bool {
        let step = &self.steps[index];
        if !step.matches(node) {
            return false;
        }
        if index == 0 {
            return true;
        }

        match step.combinator {
            Combinator::Child => node
                .parent_element()
                .is_some_and(|parent| self.matches_at(parent, index - 1)),
            Combinator::Descendant => node
                .ancestors()
                .skip(1)
                .filter(|ancestor| ancestor.is_element())
                .any(|ancestor| self.matches_at(ancestor, index - 1)),
        }
    }
}

/// Concatenated text of a node and everything below it
pub fn text_content(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const XML: &str = r#"<lfm status="ok">
  <results>
    <artist><name>A1</name><similar><artist><name>S1</name></artist></similar></artist>
    <artist><name>A2</name></artist>
  </results>
</lfm>"#;

    fn texts(selector: &str) -> Vec<String> {
        let doc = Document::parse(XML).unwrap();
        Selector::parse(selector)
            .unwrap()
            .select(&doc)
            .into_iter()
            .map(text_content)
            .collect()
    }

    #[test]
    fn test_descendant_selector() {
        assert_eq!(texts("artist name"), vec!["A1", "S1", "A2"]);
    }

    #[test]
    fn test_child_selector() {
        assert_eq!(texts("results > artist > name"), vec!["A1", "A2"]);
        assert_eq!(texts("similar>artist>name"), vec!["S1"]);
    }

    #[test]
    fn test_first_step_matches_root() {
        assert_eq!(texts("lfm > results > artist > name"), vec!["A1", "A2"]);
        assert_eq!(texts("lfm").len(), 1);
    }

    #[test]
    fn test_no_duplicate_matches_for_nested_ancestors() {
        // Both outer and inner <artist> are ancestors of S1's <name>.
        assert_eq!(texts("artist artist name"), vec!["S1"]);
        assert_eq!(texts("lfm name"), vec!["A1", "S1", "A2"]);
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(texts("results > * > name"), vec!["A1", "A2"]);
    }

    #[test]
    fn test_text_content_concatenates() {
        let doc = Document::parse("<a>x<b>y</b>z</a>").unwrap();
        let nodes = Selector::parse("a").unwrap().select(&doc);
        assert_eq!(text_content(nodes[0]), "xyz");
    }

    #[test]
    fn test_invalid_selectors() {
        for bad in ["", "  ", "> a", "a >", "a > > b"] {
            assert!(Selector::parse(bad).is_err(), "accepted {:?}", bad);
        }
    }
}
