//! Collaborators shared by every handler

use crate::adapters::{RegexNormalizer, default_providers};
use crate::config::{Config, EnrichmentConfig};
use crate::core::ports::{AddressNormalizer, BriefStore, NarrativeService, SourceProvider};
use crate::core::services::{CompletenessScorer, Reconciler};

/// Everything the handlers need to run the ingest and refresh workflow
pub struct Context {
    providers: Vec<Box<dyn SourceProvider>>,
    normalizer: Box<dyn AddressNormalizer>,
    store: Box<dyn BriefStore>,
    reconciler: Reconciler,
    scorer: CompletenessScorer,
    narrator: Option<Box<dyn NarrativeService>>,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let providers: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("Context")
            .field("providers", &providers)
            .field("reconciler", &self.reconciler)
            .field("scorer", &self.scorer)
            .field("narrator", &self.narrator.as_ref().map(|n| n.model()))
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Context with the built-in providers, default rules and no narrator
    #[must_use]
    pub fn new(store: Box<dyn BriefStore>) -> Self {
        Self {
            providers: default_providers(),
            normalizer: Box::new(RegexNormalizer::new()),
            store,
            reconciler: Reconciler::default(),
            scorer: CompletenessScorer::default(),
            narrator: None,
        }
    }

    /// Context configured from settings
    ///
    /// A narrator is attached only when enrichment is enabled, an API key
    /// is set and the crate was built with the `llm` feature.
    #[must_use]
    pub fn from_config(config: &Config, store: Box<dyn BriefStore>) -> Self {
        let mut ctx = Self::new(store)
            .with_reconciler(config.reconciler())
            .with_scorer(config.scorer());
        ctx.narrator = narrator_from_config(&config.enrichment);
        ctx
    }

    /// Replace the source providers
    #[must_use]
    pub fn with_providers(mut self, providers: Vec<Box<dyn SourceProvider>>) -> Self {
        self.providers = providers;
        self
    }

    /// Replace the address normalizer
    #[must_use]
    pub fn with_normalizer(mut self, normalizer: Box<dyn AddressNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Replace the reconciler
    #[must_use]
    pub fn with_reconciler(mut self, reconciler: Reconciler) -> Self {
        self.reconciler = reconciler;
        self
    }

    /// Replace the scorer
    #[must_use]
    pub fn with_scorer(mut self, scorer: CompletenessScorer) -> Self {
        self.scorer = scorer;
        self
    }

    /// Attach a narrative service
    #[must_use]
    pub fn with_narrator(mut self, narrator: Box<dyn NarrativeService>) -> Self {
        self.narrator = Some(narrator);
        self
    }

    /// Source providers, in query order
    #[must_use]
    pub fn providers(&self) -> &[Box<dyn SourceProvider>] {
        &self.providers
    }

    /// Address normalizer
    #[must_use]
    pub fn normalizer(&self) -> &dyn AddressNormalizer {
        self.normalizer.as_ref()
    }

    /// Brief store
    #[must_use]
    pub fn store(&self) -> &dyn BriefStore {
        self.store.as_ref()
    }

    /// Reconciler
    #[must_use]
    pub const fn reconciler(&self) -> &Reconciler {
        &self.reconciler
    }

    /// Completeness scorer
    #[must_use]
    pub const fn scorer(&self) -> &CompletenessScorer {
        &self.scorer
    }

    /// Narrative service, if any
    #[must_use]
    pub fn narrator(&self) -> Option<&dyn NarrativeService> {
        self.narrator.as_deref()
    }
}

#[cfg(feature = "llm")]
fn narrator_from_config(config: &EnrichmentConfig) -> Option<Box<dyn NarrativeService>> {
    use crate::adapters::openai::OpenAiNarrator;

    let key = enrichment_key(config)?;
    match OpenAiNarrator::new(config, key) {
        Ok(narrator) => Some(Box::new(narrator)),
        Err(e) => {
            log::warn!("narrative service unavailable: {e}");
            None
        },
    }
}

#[cfg(not(feature = "llm"))]
fn narrator_from_config(config: &EnrichmentConfig) -> Option<Box<dyn NarrativeService>> {
    if enrichment_key(config).is_some() {
        log::debug!("API key set but built without the llm feature");
    }
    None
}

fn enrichment_key(config: &EnrichmentConfig) -> Option<String> {
    if !config.enabled {
        log::debug!("narrative enrichment disabled");
        return None;
    }
    let key = config.api_key();
    if key.is_none() {
        log::debug!("{} not set, summaries will be rule-based", config.api_key_env);
    }
    key
}
