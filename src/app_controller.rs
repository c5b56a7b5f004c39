use anyhow::Result;
use log::{debug, info, warn};
use std::collections::BTreeMap;

use crate::app_config::Config;
use crate::cell_parser::ParsedCell;
use crate::display::{assemble_rows, DisplayOptions};
use crate::html_render::{render_line_page, render_navigator_table};
use crate::navigation::Navigator;
use crate::story_store::{StoryStore, Story};

// @module: Application controller wiring store, navigation and display

/// One line of the `stories` listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorySummary {
    /// Story folder name
    pub name: String,
    /// Human-readable title
    pub title: String,
    /// Number of aligned lines, zero when the aligned file is unusable
    pub line_count: usize,
}

/// Main application controller for story browsing
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Story store rooted at the configured directory
    store: StoryStore,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        let store = StoryStore::new(config.story_dir.clone());
        Ok(Self { config, store })
    }

    /// Access the underlying store
    pub fn store(&self) -> &StoryStore {
        &self.store
    }

    /// List the indexed stories with their line counts.
    pub fn list_stories(&self) -> Result<Vec<StorySummary>> {
        let index = self.store.load_index()?;
        let mut summaries = Vec::with_capacity(index.len());
        for Story { name, title } in index {
            let line_count = match self.store.aligned_lines(&name) {
                Ok(lines) => lines.len(),
                Err(e) => {
                    warn!("Story '{}' is not loadable: {}", name, e);
                    0
                }
            };
            summaries.push(StorySummary { name, title, line_count });
        }
        Ok(summaries)
    }

    /// Render the model comparison page for one line of a story.
    pub fn render_line(
        &self,
        story: &str,
        line: usize,
        opts: DisplayOptions,
    ) -> Result<String> {
        let data = self.store.load_story(story)?;
        let mut nav = Navigator::new(data.lines.len());
        nav.jump(line)?;
        let combined = &data.lines[nav.selected_index()];

        let cells: BTreeMap<String, ParsedCell> = data
            .model_names
            .iter()
            .map(|m| (m.clone(), ParsedCell::parse(combined.cell(m))))
            .collect();
        debug!(
            "Rendering '{}' line {}/{} across {} models",
            story,
            nav.line(),
            nav.total(),
            cells.len()
        );

        let rows = assemble_rows(&cells, opts);
        Ok(render_line_page(
            &combined.source,
            &combined.reference,
            &data.model_names,
            &rows,
            self.config.display.font_size,
        ))
    }

    /// Render the aligned story table with one line highlighted.
    pub fn render_navigator(&self, story: &str, line: usize) -> Result<String> {
        let lines = self.store.aligned_lines(story)?;
        let mut nav = Navigator::new(lines.len());
        nav.jump(line)?;
        info!("Story '{}': {} lines, showing line {}", story, nav.total(), nav.line());
        Ok(render_navigator_table(
            &lines,
            nav.selected_index(),
            self.config.display.font_size,
        ))
    }
}
