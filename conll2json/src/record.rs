use serde::Serialize;

/// One output record per sentence group.
///
/// The shape depends on where the group was flushed. A group closed by the
/// next meta line keeps its language markers and reports `sentiment_label`.
/// The last group of the input has no markers and reports `gold_label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Group {
        id: i64,
        sentence: String,
        language: String,
        sentiment_label: String,
    },
    Last {
        id: i64,
        sentence: String,
        gold_label: String,
    },
}

impl Record {
    pub fn id(&self) -> i64 {
        match self {
            Record::Group { id, .. } | Record::Last { id, .. } => *id,
        }
    }

    pub fn sentence(&self) -> &str {
        match self {
            Record::Group { sentence, .. } | Record::Last { sentence, .. } => sentence,
        }
    }

    /// Returns the sentiment label, whichever key it is serialized under.
    pub fn label(&self) -> &str {
        match self {
            Record::Group {
                sentiment_label, ..
            } => sentiment_label,
            Record::Last { gold_label, .. } => gold_label,
        }
    }

    /// Returns the space-joined language markers. The last record has none.
    pub fn language(&self) -> Option<&str> {
        match self {
            Record::Group { language, .. } => Some(language),
            Record::Last { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::Value;

    #[test]
    fn test_group_keys() -> Result<(), Box<dyn std::error::Error>> {
        let record = Record::Group {
            id: 1,
            sentence: "Hola amigo".to_string(),
            language: "es es".to_string(),
            sentiment_label: "positive".to_string(),
        };

        let value = serde_json::to_value(&record)?;
        let obj = value.as_object().ok_or("expected an object")?;

        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, vec!["id", "language", "sentence", "sentiment_label"]);
        assert_eq!(obj["id"], Value::from(1));
        Ok(())
    }

    #[test]
    fn test_last_keys() -> Result<(), Box<dyn std::error::Error>> {
        let record = Record::Last {
            id: 2,
            sentence: "bye".to_string(),
            gold_label: "negative".to_string(),
        };

        let value = serde_json::to_value(&record)?;
        let obj = value.as_object().ok_or("expected an object")?;

        assert_eq!(obj.len(), 3);
        assert!(!obj.contains_key("language"));
        assert_eq!(obj["gold_label"], Value::from("negative"));
        Ok(())
    }

    #[test]
    fn test_accessors() {
        let record = Record::Last {
            id: 7,
            sentence: "bye".to_string(),
            gold_label: "negative".to_string(),
        };

        assert_eq!(record.id(), 7);
        assert_eq!(record.sentence(), "bye");
        assert_eq!(record.label(), "negative");
        assert_eq!(record.language(), None);
    }
}
