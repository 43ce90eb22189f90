//! Verse lookup, search and audio service

use crate::{
    bible::SampleTextStore,
    config::BibleConfig,
    error::{AppError, AppResult},
    models::verse::{AudioResponse, ParallelResponse, SearchHit, SearchQuery, Verse, VoiceSearchQuery},
};

#[derive(Clone)]
pub struct ScriptureService {
    texts: &'static SampleTextStore,
    config: BibleConfig,
}

impl ScriptureService {
    pub fn new(texts: &'static SampleTextStore, config: BibleConfig) -> Self {
        Self { texts, config }
    }

    pub fn translations(&self) -> Vec<String> {
        self.texts.translations()
    }

    pub fn languages(&self) -> Vec<String> {
        self.texts.languages()
    }

    fn translation_or_default<'a>(&'a self, translation: Option<&'a str>) -> &'a str {
        translation.unwrap_or(&self.config.default_translation)
    }

    /// Get one verse
    pub fn verse(&self, reference: &str, translation: Option<&str>) -> AppResult<Verse> {
        let translation = self.translation_or_default(translation);
        let text = self.texts.lookup(translation, reference).ok_or_else(|| {
            AppError::NotFound("Verse not found in sample dataset".to_string())
        })?;

        Ok(Verse {
            reference: reference.to_string(),
            translation: translation.to_string(),
            text: text.to_string(),
        })
    }

    /// Get one reference in several translations.
    ///
    /// `translations` is a comma-separated list; blank entries are ignored.
    /// Fails only when no listed translation has the reference.
    pub fn parallel(&self, reference: &str, translations: Option<&str>) -> AppResult<ParallelResponse> {
        let translations = translations.unwrap_or(&self.config.parallel_translations);
        let names = translations
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty());

        let items = self.texts.lookup_parallel(reference, names);
        if items.is_empty() {
            return Err(AppError::NotFound("Reference not found".to_string()));
        }

        Ok(ParallelResponse {
            reference: reference.to_string(),
            items,
        })
    }

    /// Substring search over the sample texts
    pub fn search(&self, query: &SearchQuery) -> Vec<SearchHit> {
        let limit = query.limit.unwrap_or(self.config.search_limit);
        let translation = query.translation.as_deref().filter(|t| !t.is_empty());
        let hits = self.texts.search(&query.q, translation, limit);
        tracing::debug!("Search {:?} returned {} hits", query.q, hits.len());
        hits
    }

    /// Search using a speech transcript as the query text
    pub fn voice_search(&self, query: &VoiceSearchQuery) -> Vec<SearchHit> {
        self.search(&SearchQuery {
            q: query.transcript.clone(),
            translation: query.translation.clone(),
            language: None,
            limit: None,
        })
    }

    /// Placeholder audio link plus word timings
    pub fn audio(&self, reference: &str, translation: Option<&str>) -> AudioResponse {
        let translation = self.translation_or_default(translation);
        let audio_url = format!(
            "{}/{}/{}.mp3",
            self.config.audio_base_url.trim_end_matches('/'),
            translation,
            reference.replace(' ', "_")
        );

        AudioResponse {
            reference: reference.to_string(),
            translation: translation.to_string(),
            audio_url,
            timings: self.texts.timings(reference),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bible;

    fn service() -> ScriptureService {
        ScriptureService::new(bible::sample(), BibleConfig::default())
    }

    #[test]
    fn test_verse_uses_default_translation() {
        let verse = service().verse("John 3:16", None).unwrap();
        assert_eq!(verse.translation, "ESV");
        assert!(verse.text.starts_with("For God so loved the world, that"));
    }

    #[test]
    fn test_verse_not_found() {
        assert!(matches!(
            service().verse("John 3:16", Some("KJV")),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_parallel_trims_names() {
        let parallel = service().parallel("Psalm 23:1", Some(" NIV , ESV,")).unwrap();
        let names: Vec<&str> = parallel.items.iter().map(|i| i.translation.as_str()).collect();
        assert_eq!(names, vec!["NIV", "ESV"]);
    }

    #[test]
    fn test_parallel_missing_everywhere() {
        assert!(matches!(
            service().parallel("Genesis 1:1", None),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_voice_search_matches_search() {
        let voice = service().voice_search(&VoiceSearchQuery {
            transcript: "my shepherd".into(),
            translation: Some("NIV".into()),
        });
        let text = service().search(&SearchQuery {
            q: "my shepherd".into(),
            translation: Some("NIV".into()),
            language: None,
            limit: None,
        });
        assert_eq!(voice, text);
        assert_eq!(voice.len(), 1);
    }

    #[test]
    fn test_empty_translation_means_all() {
        let hits = service().search(&SearchQuery {
            q: "shepherd".into(),
            translation: Some(String::new()),
            language: None,
            limit: None,
        });
        let names: Vec<&str> = hits.iter().map(|h| h.translation.as_str()).collect();
        assert_eq!(names, vec!["ESV", "NIV"]);
    }

    #[test]
    fn test_audio_url_and_timings() {
        let audio = service().audio("John 3:16", Some("NIV"));
        assert_eq!(audio.audio_url, "https://cdn.example.com/audio/NIV/John_3:16.mp3");
        assert_eq!(audio.timings.len(), 15);

        let audio = service().audio("Psalm 23:1", None);
        assert_eq!(audio.translation, "ESV");
        assert!(audio.timings.is_empty());
    }
}
