use dioxus::core::AttributeValue;
use dioxus::prelude::*;

/// Merge attribute groups, collapsing every `class` entry into one
/// space-joined attribute at the position of the first. Base classes come
/// first so caller-supplied groups append rather than replace.
pub(crate) fn merge_attributes(groups: Vec<Vec<Attribute>>) -> Vec<Attribute> {
    let mut merged: Vec<Attribute> = Vec::new();
    let mut classes: Vec<String> = Vec::new();
    let mut class_slot: Option<usize> = None;

    for attr in groups.into_iter().flatten() {
        if attr.name == "class" {
            if let AttributeValue::Text(text) = &attr.value {
                if !text.is_empty() {
                    classes.push(text.clone());
                }
                if class_slot.is_none() {
                    class_slot = Some(merged.len());
                    merged.push(attr);
                }
                continue;
            }
        }
        merged.push(attr);
    }

    if let Some(idx) = class_slot {
        merged[idx] = Attribute::new("class", classes.join(" "), None, false);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_of(attrs: &[Attribute]) -> Option<String> {
        attrs.iter().find(|a| a.name == "class").and_then(|a| {
            if let AttributeValue::Text(text) = &a.value {
                Some(text.clone())
            } else {
                None
            }
        })
    }

    #[test]
    fn classes_collapse_in_order() {
        let base = vec![Attribute::new("class", "card", None, false)];
        let extra = vec![Attribute::new("class", "auth-card", None, false)];
        let merged = merge_attributes(vec![base, extra]);
        assert_eq!(class_of(&merged).as_deref(), Some("card auth-card"));
        assert_eq!(merged.len(), 1);
    }

    #[test]
    fn non_class_attributes_pass_through() {
        let base = vec![
            Attribute::new("class", "badge", None, false),
            Attribute::new("data-style", "primary", None, false),
        ];
        let merged = merge_attributes(vec![base, vec![]]);
        assert_eq!(merged.len(), 2);
        assert_eq!(class_of(&merged).as_deref(), Some("badge"));
    }

    #[test]
    fn empty_class_entries_are_skipped() {
        let base = vec![Attribute::new("class", "input", None, false)];
        let extra = vec![Attribute::new("class", "", None, false)];
        let merged = merge_attributes(vec![base, extra]);
        assert_eq!(class_of(&merged).as_deref(), Some("input"));
    }
}
