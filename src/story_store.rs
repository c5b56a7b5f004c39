use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::errors::StoreError;

// @module: Story data loading and per-model cell merging

/// Index filename at the story root
const STORIES_FILE: &str = "stories.json";

/// Aligned source/reference lines, one file per story folder
const ALIGNED_FILE: &str = "aligned.json";

/// Per-model annotated cells, one file per story folder
const MODELS_FILE: &str = "models.json";

/// Model-map keys that are bookkeeping, not model sheets
const RESERVED_MODEL_NAMES: &[&str] = &["metadata", "reference"];

/// One entry of the story index
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Story {
    /// Folder name of the story
    pub name: String,
    /// Human-readable title
    pub title: String,
}

/// One aligned line: source-language text plus reference English
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlignedLine {
    /// Source-language line, the join key across sheets
    pub source: String,
    /// Reference English translation
    pub reference: String,
}

/// One model sheet row: the join key plus that model's raw annotated cell
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModelRow {
    /// Source-language line, the join key
    pub source: String,
    /// Raw cell text produced by the model
    pub cell: String,
}

/// One displayable line after merging: reference data plus every model's
/// raw cell, keyed by model name. Missing cells are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinedLine {
    /// Source-language line
    pub source: String,
    /// Reference English translation (empty for model-only rows)
    pub reference: String,
    /// Raw cell text per model
    pub cells: BTreeMap<String, String>,
}

impl CombinedLine {
    /// The raw cell for a model, empty when the model had no row here
    pub fn cell(&self, model: &str) -> &str {
        self.cells.get(model).map(String::as_str).unwrap_or("")
    }
}

/// A fully loaded story: merged lines plus the model column order
#[derive(Debug, Clone)]
pub struct StoryData {
    /// Story folder name
    pub name: String,
    /// Merged lines, reference rows first, model-only rows appended
    pub lines: Vec<CombinedLine>,
    /// Model names in alphabetical (column) order
    pub model_names: Vec<String>,
}

/// Filesystem-backed story store.
///
/// Layout under the root: `stories.json` index, then one folder per story
/// holding `aligned.json` and optionally `models.json`.
#[derive(Debug, Clone)]
pub struct StoryStore {
    root: PathBuf,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    if !path.is_file() {
        return Err(StoreError::FileNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| StoreError::ReadFailed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|e| StoreError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl StoryStore {
    /// Create a store rooted at the given directory
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        StoryStore { root: root.into() }
    }

    /// Path of the story root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load the story index
    pub fn load_index(&self) -> Result<Vec<Story>, StoreError> {
        read_json(&self.root.join(STORIES_FILE))
    }

    /// Story folders under the root that actually carry an aligned file,
    /// sorted by name. Folders without one are skipped with a warning.
    pub fn available_stories(&self) -> Vec<String> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
        {
            if !entry.file_type().is_dir() {
                continue;
            }
            let name = entry.file_name().to_string_lossy().to_string();
            if entry.path().join(ALIGNED_FILE).is_file() {
                names.push(name);
            } else {
                warn!("Story folder '{}' has no {}, skipping", name, ALIGNED_FILE);
            }
        }
        names.sort();
        names
    }

    /// Load the aligned lines of one story
    pub fn aligned_lines(&self, story: &str) -> Result<Vec<AlignedLine>, StoreError> {
        let lines: Vec<AlignedLine> = read_json(&self.root.join(story).join(ALIGNED_FILE))?;
        if lines.is_empty() {
            return Err(StoreError::EmptyStory(story.to_string()));
        }
        Ok(lines)
    }

    /// Load one story and merge its model sheets into the aligned lines.
    ///
    /// Outer join keyed by the source-language line: reference rows keep
    /// their file order, rows present only in a model sheet are appended in
    /// model-name order. A missing models file is not an error; the story
    /// then renders reference-only.
    pub fn load_story(&self, story: &str) -> Result<StoryData, StoreError> {
        let aligned = self.aligned_lines(story)?;

        let models_path = self.root.join(story).join(MODELS_FILE);
        let sheets: BTreeMap<String, Vec<ModelRow>> = if models_path.is_file() {
            read_json(&models_path)?
        } else {
            warn!("No {} for story '{}', showing reference only", MODELS_FILE, story);
            BTreeMap::new()
        };

        let mut lines: Vec<CombinedLine> = aligned
            .into_iter()
            .map(|l| CombinedLine {
                source: l.source,
                reference: l.reference,
                cells: BTreeMap::new(),
            })
            .collect();
        let mut index_by_source: BTreeMap<String, usize> = lines
            .iter()
            .enumerate()
            .map(|(i, l)| (l.source.clone(), i))
            .collect();

        let mut model_names = Vec::new();
        for (model, rows) in &sheets {
            if RESERVED_MODEL_NAMES.contains(&model.to_lowercase().as_str()) {
                debug!("Skipping reserved sheet '{}'", model);
                continue;
            }
            model_names.push(model.clone());
            for row in rows {
                let idx = match index_by_source.get(&row.source) {
                    Some(&idx) => idx,
                    None => {
                        lines.push(CombinedLine {
                            source: row.source.clone(),
                            reference: String::new(),
                            cells: BTreeMap::new(),
                        });
                        let idx = lines.len() - 1;
                        index_by_source.insert(row.source.clone(), idx);
                        idx
                    }
                };
                lines[idx].cells.insert(model.clone(), row.cell.clone());
            }
        }

        debug!(
            "Loaded story '{}': {} lines, {} model sheets",
            story,
            lines.len(),
            model_names.len()
        );
        Ok(StoryData {
            name: story.to_string(),
            lines,
            model_names,
        })
    }
}
