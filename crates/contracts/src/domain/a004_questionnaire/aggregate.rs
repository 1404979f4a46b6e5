use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const QUESTION_TYPE: &str = "cards:Question";
pub const SECTION_TYPE: &str = "cards:Section";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestionnaireNodeKind {
    Question,
    Section,
}

impl QuestionnaireNodeKind {
    fn from_primary_type(primary_type: &str) -> Option<Self> {
        match primary_type {
            QUESTION_TYPE => Some(Self::Question),
            SECTION_TYPE => Some(Self::Section),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Question => "Question",
            Self::Section => "Section",
        }
    }
}

/// A question or section selectable as an export column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionnaireNode {
    pub name: String,
    pub text: Option<String>,
    pub path: String,
    pub kind: QuestionnaireNodeKind,
}

/// Flattens a `.deep.json` questionnaire into its questions and sections in
/// document order.
///
/// Sections are descended into; questions are leaves (their children are
/// answer options). Any other object or array is walked transparently, so
/// wrapper nodes between sections do not hide their content.
pub fn find_questions_or_sections(json: &Value) -> Vec<QuestionnaireNode> {
    let mut result = Vec::new();
    walk(json, &mut result);
    result
}

fn walk(json: &Value, result: &mut Vec<QuestionnaireNode>) {
    let children: Box<dyn Iterator<Item = &Value>> = match json {
        Value::Object(map) => Box::new(map.values()),
        Value::Array(items) => Box::new(items.iter()),
        _ => return,
    };

    for child in children {
        let kind = child
            .get("jcr:primaryType")
            .and_then(Value::as_str)
            .and_then(QuestionnaireNodeKind::from_primary_type);

        match kind {
            Some(kind) => {
                result.push(QuestionnaireNode {
                    name: string_field(child, "@name"),
                    text: child.get("text").and_then(Value::as_str).map(str::to_string),
                    path: string_field(child, "@path"),
                    kind,
                });
                if kind == QuestionnaireNodeKind::Section {
                    walk(child, result);
                }
            }
            None if child.is_object() || child.is_array() => walk(child, result),
            None => {}
        }
    }
}

fn string_field(node: &Value, key: &str) -> String {
    node.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "jcr:primaryType": "cards:Questionnaire",
            "@path": "/Questionnaires/Visit",
            "title": "Visit",
            "date": {
                "jcr:primaryType": "cards:Question",
                "@name": "date",
                "@path": "/Questionnaires/Visit/date",
                "text": "Visit date",
                "opt": {"jcr:primaryType": "cards:AnswerOption", "@name": "opt"}
            },
            "history": {
                "jcr:primaryType": "cards:Section",
                "@name": "history",
                "@path": "/Questionnaires/Visit/history",
                "smoker": {
                    "jcr:primaryType": "cards:Question",
                    "@name": "smoker",
                    "@path": "/Questionnaires/Visit/history/smoker"
                }
            },
            "wrapper": {
                "items": [
                    {"jcr:primaryType": "cards:Question", "@name": "nested", "@path": "/q/nested"}
                ]
            }
        })
    }

    #[test]
    fn test_document_order_and_kinds() {
        let nodes = find_questions_or_sections(&sample());
        let names: Vec<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["date", "history", "smoker", "nested"]);
        assert_eq!(nodes[0].kind, QuestionnaireNodeKind::Question);
        assert_eq!(nodes[0].text.as_deref(), Some("Visit date"));
        assert_eq!(nodes[1].kind, QuestionnaireNodeKind::Section);
        assert_eq!(nodes[2].path, "/Questionnaires/Visit/history/smoker");
    }

    #[test]
    fn test_question_children_not_walked() {
        let nodes = find_questions_or_sections(&sample());
        assert!(nodes.iter().all(|n| n.name != "opt"));
    }

    #[test]
    fn test_empty_and_scalar_inputs() {
        assert!(find_questions_or_sections(&Value::Null).is_empty());
        assert!(find_questions_or_sections(&json!("text")).is_empty());
        assert!(find_questions_or_sections(&json!({})).is_empty());
    }
}
