/*!
 * Common test utilities for the storylens test suite
 */

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// A model cell with all four sections present.
///
/// The literal section carries three bullets: two with two delimiters and
/// one with a single delimiter (which the classifier moves to the
/// free-translation bucket).
pub fn sample_cell_text() -> String {
    concat!(
        "**AI English Translation**\n",
        "- \"Kwaku Ananse was a clever spider.\"\n",
        "\n",
        "**1. Literal Translation Mapping**\n",
        "- Kwaku => Kweku => noun\n",
        "- ananse => spider => noun\n",
        "- wura => master\n",
        "\n",
        "**2. Cultural Context**\n",
        "Ananse is the trickster figure of Akan folklore.\n",
        "\n",
        "**3. Translation Clarification**\n",
        "The name doubles as the word for spider.\n",
    )
    .to_string()
}

/// A cell that only carries the loose, unbolded heading forms.
pub fn fallback_cell_text() -> String {
    concat!(
        "English Translation: The spider went to town.\n",
        "2. Cultural Context: Market day gatherings are a common setting.\n",
        "3. Translation Clarification - Town here means the market town.\n",
    )
    .to_string()
}

/// Writes a complete story tree under `root`: index, one story folder with
/// aligned lines and two model sheets (plus a reserved `metadata` sheet
/// that loaders must skip).
pub fn write_sample_story(root: &Path) -> Result<PathBuf> {
    fs::write(
        root.join("stories.json"),
        r#"[{"name": "Anansesem01", "title": "How Ananse Got The Stories"}]"#,
    )?;

    let story_dir = root.join("Anansesem01");
    fs::create_dir_all(&story_dir)?;
    fs::write(
        story_dir.join("aligned.json"),
        r#"[
            {"source": "Kwaku Ananse ne ne wura.", "reference": "Kwaku Ananse and his master."},
            {"source": "Ananse koo kurom.", "reference": "Ananse went to town."}
        ]"#,
    )?;

    let cell = sample_cell_text();
    let models = serde_json::json!({
        "metadata": [],
        "zephyr": [
            {"source": "Kwaku Ananse ne ne wura.", "cell": cell},
            {"source": "Obiara nim no.", "cell": ""}
        ],
        "akuaba": [
            {"source": "Kwaku Ananse ne ne wura.", "cell": cell}
        ]
    });
    fs::write(
        story_dir.join("models.json"),
        serde_json::to_string_pretty(&models)?,
    )?;
    Ok(story_dir)
}
