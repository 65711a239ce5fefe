//! Builds an output deck from a content plan.
//!
//! Assembly runs strictly in order: the plan is checked against the library,
//! an empty output deck is created from the library, the title slide and one
//! template slide per plan entry are copied in, and then every slide is filled
//! and saved on its own. A failure part-way leaves the slides saved so far on
//! disk.

use std::path::{Path, PathBuf};

use crate::config::BuilderConfig;
use crate::deck::{LibraryDeck, OutputDeck};
use crate::dispatch::{Dispatcher, FillReport};
use crate::errors::Result;
use crate::host::{DeckStore, HostSession, JsonFileStore};
use crate::plan::ContentPlan;

/// Where an assembly is. States only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    Idle,
    DeckCreated,
    SlidesCopied,
    /// Output positions up to and including `position` are filled and saved.
    Filled { position: usize },
    Saved,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyReport {
    pub output_path: PathBuf,
    pub slide_count: usize,
    pub title: FillReport,
    /// One report per plan entry, in plan order.
    pub slides: Vec<FillReport>,
}

impl AssemblyReport {
    pub fn written(&self) -> usize {
        self.title.written + self.slides.iter().map(|r| r.written).sum::<usize>()
    }

    pub fn skipped(&self) -> usize {
        self.title.skipped + self.slides.iter().map(|r| r.skipped).sum::<usize>()
    }
}

#[derive(Debug, Clone)]
pub struct DeckAssembler {
    dispatcher: Dispatcher,
    library_path: PathBuf,
    output_path: PathBuf,
    state: AssemblyState,
}

impl DeckAssembler {
    pub fn new(
        dispatcher: Dispatcher,
        library_path: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            dispatcher,
            library_path: library_path.into(),
            output_path: output_path.into(),
            state: AssemblyState::Idle,
        }
    }

    pub fn from_config(config: &BuilderConfig) -> Self {
        Self::new(Dispatcher::default(), &config.library_path, &config.output_path)
    }

    pub fn state(&self) -> AssemblyState {
        self.state
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Checks `plan` against the bindings and the library without writing
    /// anything.
    pub fn check<S: DeckStore>(
        &self,
        session: &mut HostSession<S>,
        plan: &ContentPlan,
    ) -> Result<()> {
        let library = LibraryDeck::open(session, &self.library_path)?;
        let checked = plan.validate(&self.dispatcher, library.slide_count());
        library.close(session);
        checked
    }

    /// Runs a full assembly of `plan` through `session`.
    pub fn assemble<S: DeckStore>(
        &mut self,
        session: &mut HostSession<S>,
        plan: &ContentPlan,
    ) -> Result<AssemblyReport> {
        self.state = AssemblyState::Idle;

        let library = LibraryDeck::open(session, &self.library_path)?;
        if let Err(e) = plan.validate(&self.dispatcher, library.slide_count()) {
            library.close(session);
            return Err(e);
        }

        log::info!("Creating {}...", plan.presentation_title);
        let mut output = match OutputDeck::create(session, &self.library_path, &self.output_path) {
            Ok(output) => output,
            Err(e) => {
                library.close(session);
                return Err(e);
            }
        };
        self.advance(AssemblyState::DeckCreated);

        let indices = plan.library_indices();
        log::info!(
            "Copying Slides {}...",
            indices.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(", ")
        );
        let copied = output.copy_many(&library, &indices);
        library.close(session);
        copied?;
        output.save(session)?;
        self.advance(AssemblyState::SlidesCopied);

        let title = self
            .dispatcher
            .fill_title(output.slide_mut(1)?, &plan.presentation_title);
        output.save(session)?;
        self.advance(AssemblyState::Filled { position: 1 });

        let mut slides = Vec::with_capacity(plan.slides.len());
        for (i, spec) in plan.slides.iter().enumerate() {
            let position = i + 2;
            log::info!("Editing Slide {} (Type {})...", position, spec.slide_index);
            let report = self.dispatcher.fill(
                output.slide_mut(position)?,
                spec.slide_index,
                &spec.slide_title,
                &spec.slots,
            )?;
            log::debug!(
                "Slide {}: {} written, {} skipped",
                position,
                report.written,
                report.skipped
            );
            output.save(session)?;
            self.advance(AssemblyState::Filled { position });
            slides.push(report);
        }

        output.save(session)?;
        self.advance(AssemblyState::Saved);
        log::info!("Presentation Edited and Saved.");

        let report = AssemblyReport {
            output_path: output.path().to_path_buf(),
            slide_count: output.slide_count(),
            title,
            slides,
        };
        output.close();
        self.advance(AssemblyState::Closed);
        Ok(report)
    }

    fn advance(&mut self, next: AssemblyState) {
        log::debug!("Assembly {:?} -> {:?}", self.state, next);
        self.state = next;
    }
}

/// Parses `raw`, builds the output deck from it with a filesystem host, and
/// stores it as the saved plan. A plan that fails validation never replaces
/// the saved one.
pub fn build_from_plan_text(config: &BuilderConfig, raw: &str) -> Result<AssemblyReport> {
    let plan = ContentPlan::from_json(raw)?;
    let mut session = HostSession::new(JsonFileStore::new());
    let mut assembler = DeckAssembler::from_config(config);
    assembler.check(&mut session, &plan)?;
    ContentPlan::persist_raw(raw, &config.plan_path)?;
    log::info!("Plan saved to {}", config.plan_path.display());
    finish(session, &mut assembler, &plan)
}

/// Builds the output deck again from the last saved plan.
pub fn rebuild_from_saved_plan(config: &BuilderConfig) -> Result<AssemblyReport> {
    log::info!("Rebuilding from {}", config.plan_path.display());
    let plan = ContentPlan::load(&config.plan_path)?;
    let session = HostSession::new(JsonFileStore::new());
    finish(session, &mut DeckAssembler::from_config(config), &plan)
}

fn finish(
    mut session: HostSession<JsonFileStore>,
    assembler: &mut DeckAssembler,
    plan: &ContentPlan,
) -> Result<AssemblyReport> {
    let report = assembler.assemble(&mut session, plan)?;
    log::info!("Closing host...");
    session.close()?;
    log::info!("Output saved to {}", report.output_path.display());
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{FillError, HostError};
    use crate::host::{MemoryStore, OpenMode};
    use crate::models::presentation::Presentation;

    /// Fails the `fail_at`-th save (1-based) of any deck, and every save
    /// after it.
    struct FailingStore {
        inner: MemoryStore,
        saves: usize,
        fail_at: usize,
    }

    impl DeckStore for FailingStore {
        fn open(
            &mut self,
            path: &Path,
            mode: OpenMode,
        ) -> std::result::Result<Presentation, HostError> {
            self.inner.open(path, mode)
        }

        fn save(
            &mut self,
            path: &Path,
            deck: &Presentation,
        ) -> std::result::Result<(), HostError> {
            self.saves += 1;
            if self.saves >= self.fail_at {
                return Err(HostError::Io(std::io::Error::other("disk full")));
            }
            self.inner.save(path, deck)
        }
    }

    /// A library where slide `i` (1-based) has a "Title 1" or "Titre 1"
    /// shape reading "Template i" and a body shape.
    fn library(count: usize) -> Presentation {
        let slides: Vec<_> = (1..=count)
            .map(|i| {
                let title = if i == 1 { "Title 1" } else { "Titre 1" };
                serde_json::json!({
                    "objectId": format!("s{i}"),
                    "pageElements": [
                        {"objectId": format!("s{i}_t"), "title": title, "shape": {"text": {"textElements": [
                            {"endIndex": 11, "paragraphMarker": {}},
                            {"endIndex": 11, "textRun": {"content": format!("Template {i}\n")}}
                        ]}}},
                        {"objectId": format!("s{i}_b"), "title": "ZoneTexte 8", "shape": {}}
                    ]
                })
            })
            .collect();
        serde_json::from_value(serde_json::json!({"presentationId": "lib", "slides": slides}))
            .unwrap()
    }

    fn plan(raw: &str) -> ContentPlan {
        ContentPlan::from_json(raw).unwrap()
    }

    fn setup(count: usize) -> (MemoryStore, HostSession<MemoryStore>, DeckAssembler) {
        let store = MemoryStore::new();
        store.insert("lib.json", library(count));
        let session = HostSession::new(store.clone());
        let assembler = DeckAssembler::new(Dispatcher::default(), "lib.json", "out.json");
        (store, session, assembler)
    }

    #[test]
    fn title_only_plan_builds_two_slides() {
        let (store, mut session, mut assembler) = setup(10);
        let plan = plan(
            r#"{"presentation_title": "Q1 Review", "slides": [
                {"slide_index": 7, "slide_title": "Overview", "slots": {}}
            ]}"#,
        );
        let report = assembler.assemble(&mut session, &plan).unwrap();
        assert_eq!(report.slide_count, 2);
        assert_eq!(assembler.state(), AssemblyState::Closed);

        let deck = store.get("out.json").unwrap();
        let pristine = library(10);
        let texts = |page: &crate::models::page::Page| -> Vec<Option<String>> {
            page.elements().iter().map(|e| e.shape_text()).collect()
        };
        assert_eq!(texts(deck.slide(0).unwrap())[0].as_deref(), Some("Q1 Review"));
        assert_eq!(texts(deck.slide(1).unwrap())[0].as_deref(), Some("Overview"));
        assert_eq!(
            deck.slide(1).unwrap().elements()[1],
            pristine.slide(6).unwrap().elements()[1]
        );
    }

    #[test]
    fn every_step_is_saved() {
        let (store, mut session, mut assembler) = setup(10);
        let plan = plan(
            r#"{"presentation_title": "Deck", "slides": [
                {"slide_index": 4, "slide_title": "A", "slots": {"source": "Survey"}},
                {"slide_index": 7, "slide_title": "B", "slots": {}},
                {"slide_index": 4, "slide_title": "C", "slots": {}}
            ]}"#,
        );
        let report = assembler.assemble(&mut session, &plan).unwrap();
        assert_eq!(report.slide_count, 4);
        assert_eq!(report.slides.len(), 3);
        assert_eq!(report.slides[0].template, Some(4));

        // create, copy, title, three slides, final
        assert_eq!(store.save_count("out.json"), 7);

        let deck = store.get("out.json").unwrap();
        assert_eq!(
            deck.slide(1).unwrap().elements()[1].shape_text().as_deref(),
            Some("Survey")
        );
        assert_eq!(deck.slide(3).unwrap().elements()[1].shape_text(), None);
    }

    #[test]
    fn unknown_template_aborts_before_any_write() {
        let (store, mut session, mut assembler) = setup(10);
        let plan = plan(
            r#"{"presentation_title": "Deck", "slides": [
                {"slide_index": 7, "slide_title": "A"},
                {"slide_index": 9999, "slide_title": "B"}
            ]}"#,
        );
        let err = assembler.assemble(&mut session, &plan).unwrap_err();
        assert!(matches!(err, FillError::UnknownTemplate(9999)));
        assert_eq!(store.save_count("out.json"), 0);
        assert_eq!(assembler.state(), AssemblyState::Idle);
    }

    #[test]
    fn templates_beyond_the_library_are_rejected() {
        let (store, mut session, mut assembler) = setup(5);
        let plan = plan(
            r#"{"presentation_title": "Deck", "slides": [{"slide_index": 7, "slide_title": "A"}]}"#,
        );
        let err = assembler.assemble(&mut session, &plan).unwrap_err();
        assert!(matches!(err, FillError::SlideOutOfRange { index: 6, count: 5 }));
        assert!(store.get("out.json").is_none());
    }

    #[test]
    fn host_failures_name_the_path() {
        let (_store, mut session, _) = setup(5);
        let mut assembler = DeckAssembler::new(Dispatcher::default(), "missing.json", "out.json");
        let plan = plan(r#"{"presentation_title": "Deck", "slides": []}"#);
        let err = assembler.assemble(&mut session, &plan).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn reassembly_gives_the_same_deck() {
        let (store, mut session, mut assembler) = setup(10);
        let plan = plan(
            r#"{"presentation_title": "Deck", "slides": [
                {"slide_index": 4, "slide_title": "A", "slots": {"source": "Survey"}}
            ]}"#,
        );
        assembler.assemble(&mut session, &plan).unwrap();
        let first = store.get("out.json").unwrap();
        assembler.assemble(&mut session, &plan).unwrap();
        assert_eq!(store.get("out.json").unwrap(), first);
    }

    #[test]
    fn failure_mid_assembly_keeps_the_slides_already_saved() {
        let store = MemoryStore::new();
        store.insert("lib.json", library(10));
        store.record_history();
        // create, copy, title, slide 2, then the save after slide 3 fails
        let mut session = HostSession::new(FailingStore {
            inner: store.clone(),
            saves: 0,
            fail_at: 5,
        });
        let mut assembler = DeckAssembler::new(Dispatcher::default(), "lib.json", "out.json");
        let plan = plan(
            r#"{"presentation_title": "Deck", "slides": [
                {"slide_index": 4, "slide_title": "A", "slots": {"source": "Survey"}},
                {"slide_index": 4, "slide_title": "B", "slots": {"source": "Census"}},
                {"slide_index": 4, "slide_title": "C", "slots": {"source": "Poll"}}
            ]}"#,
        );

        let err = assembler.assemble(&mut session, &plan).unwrap_err();
        assert!(matches!(
            &err,
            FillError::Host {
                operation: "save",
                source: HostError::Io(_),
                ..
            }
        ));
        assert!(err.to_string().contains("out.json"));
        assert_eq!(assembler.state(), AssemblyState::Filled { position: 2 });

        let history = store.history("out.json");
        assert_eq!(history.len(), 4);
        let last = history.last().unwrap();
        let body = |i: usize| last.slide(i).unwrap().elements()[1].shape_text();
        let heading = |i: usize| last.slide(i).unwrap().elements()[0].shape_text();
        assert_eq!(last.slide_count(), 4);
        assert_eq!(heading(0).as_deref(), Some("Deck"));
        assert_eq!(heading(1).as_deref(), Some("A"));
        assert_eq!(body(1).as_deref(), Some("Survey"));
        assert_eq!(heading(2).as_deref(), Some("Template 4"));
        assert_eq!(body(2), None);
        assert_eq!(heading(3).as_deref(), Some("Template 4"));
        assert_eq!(store.get("out.json").as_ref(), Some(last));
    }
}
