//! Study tools and AI helpers
//!
//! All content is fixed or filled from a template; nothing here keeps state
//! or calls out of process.

use crate::models::study::{
    AiRequest, Commentary, CrossReferences, Devotional, Explanation, Places, Prayer, Recommendation,
    Summary, Timeline,
};

const CROSS_REFERENCES: &[(&str, &[&str])] = &[
    ("John 3:16", &["Romans 5:8", "1 John 4:9"]),
    ("Psalm 23:1", &["John 10:11", "Ezekiel 34:11"]),
];

#[derive(Clone, Default)]
pub struct StudyService;

impl StudyService {
    pub fn new() -> Self {
        Self
    }

    /// Suggested verses; `based_on` only changes the stated reason
    pub fn recommendations(&self, based_on: &str) -> Vec<Recommendation> {
        vec![
            Recommendation {
                reference: "Psalm 23:1".to_string(),
                reason: format!("Because you read {}", based_on),
            },
            Recommendation {
                reference: "John 3:16".to_string(),
                reason: "Popular across themes".to_string(),
            },
        ]
    }

    pub fn cross_references(&self, reference: &str) -> CrossReferences {
        let cross_references: Vec<String> = CROSS_REFERENCES
            .iter()
            .find(|(key, _)| *key == reference)
            .map(|(_, refs)| refs.iter().map(|r| r.to_string()).collect())
            .unwrap_or_default();

        CrossReferences {
            reference: reference.to_string(),
            cross_references,
        }
    }

    pub fn commentary(&self, reference: &str) -> Commentary {
        Commentary {
            reference: reference.to_string(),
            commentary: "Sample commentary for study. Expand with real sources.".to_string(),
        }
    }

    pub fn places(&self, reference: &str) -> Places {
        Places {
            reference: reference.to_string(),
            places: vec!["Jerusalem".to_string(), "Nazareth".to_string()],
        }
    }

    pub fn timeline(&self, reference: &str) -> Timeline {
        Timeline {
            reference: reference.to_string(),
            events: vec!["Birth of Jesus".to_string(), "Ministry in Galilee".to_string()],
        }
    }

    pub fn explain(&self, request: &AiRequest) -> Explanation {
        let target = target(request.reference.as_deref(), request.chapter.as_deref(), "the verse");
        Explanation {
            explanation: format!(
                "Here's a concise explanation of {} providing historical and theological context.",
                target
            ),
        }
    }

    /// Chapter takes precedence over reference for summaries
    pub fn summarize(&self, request: &AiRequest) -> Summary {
        let target = target(request.chapter.as_deref(), request.reference.as_deref(), "the passage");
        Summary {
            summary: format!("This summary captures the main themes and structure of {}.", target),
        }
    }

    pub fn devotional(&self, request: &AiRequest) -> Devotional {
        let target = target(request.reference.as_deref(), request.chapter.as_deref(), "today's reading");
        Devotional {
            devotional: format!("A short devotional for {}, ending with an applicable prayer.", target),
        }
    }

    pub fn prayer(&self, _request: &AiRequest) -> Prayer {
        Prayer {
            prayer: "Personalized prayer prompt: Take a deep breath, be still, and bring your concerns before God."
                .to_string(),
        }
    }
}

/// First non-empty of `first`, `second`, else `fallback`
fn target<'a>(first: Option<&'a str>, second: Option<&'a str>, fallback: &'a str) -> &'a str {
    first
        .filter(|s| !s.is_empty())
        .or_else(|| second.filter(|s| !s.is_empty()))
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_references() {
        let study = StudyService::new();
        assert_eq!(
            study.cross_references("John 3:16").cross_references,
            vec!["Romans 5:8", "1 John 4:9"]
        );
        assert!(study.cross_references("Genesis 1:1").cross_references.is_empty());
    }

    #[test]
    fn test_recommendations_mention_source() {
        let items = StudyService::new().recommendations("Psalms");
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].reason, "Because you read Psalms");
    }

    #[test]
    fn test_ai_templates_pick_target() {
        let study = StudyService::new();
        let request = AiRequest {
            reference: Some("John 3:16".into()),
            chapter: Some("John 3".into()),
            prompt: None,
        };
        assert!(study.explain(&request).explanation.contains("John 3:16"));
        assert!(study.summarize(&request).summary.contains("of John 3."));
        assert!(study.devotional(&request).devotional.contains("John 3:16"));

        let empty = AiRequest::default();
        assert!(study.explain(&empty).explanation.contains("the verse"));
        assert!(study.summarize(&empty).summary.contains("the passage"));
        assert!(study.devotional(&empty).devotional.contains("today's reading"));
    }

    #[test]
    fn test_templates_are_deterministic() {
        let study = StudyService::new();
        let request = AiRequest::default();
        assert_eq!(study.prayer(&request).prayer, study.prayer(&request).prayer);
    }
}
