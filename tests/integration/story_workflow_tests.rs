/*!
 * Store-to-HTML workflow tests driving the controller end to end
 */

use anyhow::Result;
use storylens::app_config::Config;
use storylens::app_controller::Controller;
use storylens::display::DisplayOptions;
use crate::common;

fn controller_for(dir: &std::path::Path) -> Result<Controller> {
    let mut config = Config::default();
    config.story_dir = dir.to_path_buf();
    Controller::with_config(config)
}

/// Test the stories listing with line counts
#[test]
fn test_list_stories_withSampleTree_shouldReportLineCounts() -> Result<()> {
    let dir = common::create_temp_dir()?;
    common::write_sample_story(dir.path())?;
    let controller = controller_for(dir.path())?;

    let summaries = controller.list_stories()?;
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].name, "Anansesem01");
    assert_eq!(summaries[0].title, "How Ananse Got The Stories");
    assert_eq!(summaries[0].line_count, 2);
    Ok(())
}

/// Test rendering a line that both models annotated
#[test]
fn test_render_line_withAnnotatedLine_shouldEmitComparisonTable() -> Result<()> {
    let dir = common::create_temp_dir()?;
    common::write_sample_story(dir.path())?;
    let controller = controller_for(dir.path())?;

    let opts = DisplayOptions {
        show_cultural: true,
        ..DisplayOptions::default()
    };
    let html = controller.render_line("Anansesem01", 1, opts)?;

    assert!(html.contains("<strong>AKAN:</strong> Kwaku Ananse ne ne wura."));
    assert!(html.contains("<strong>ReferenceEN:</strong> Kwaku Ananse and his master."));
    // Model column headers in alphabetical order
    assert!(html.contains("<th>akuaba</th><th>zephyr</th>"));
    // Summary literal rows with POS-colored payloads
    assert!(html.contains("<span style=\"color:navy;\">Kwaku</span>"));
    assert!(html.contains("Cultural Context"));
    Ok(())
}

/// Test rendering a line no model annotated falls back to the placeholder
#[test]
fn test_render_line_withUnannotatedLine_shouldRenderPlaceholder() -> Result<()> {
    let dir = common::create_temp_dir()?;
    common::write_sample_story(dir.path())?;
    let controller = controller_for(dir.path())?;

    let html = controller.render_line("Anansesem01", 2, DisplayOptions::default())?;
    assert!(html.contains("[No data to display"));
    Ok(())
}

/// Test out-of-range line requests surface as errors
#[test]
fn test_render_line_withOutOfRangeLine_shouldFail() -> Result<()> {
    let dir = common::create_temp_dir()?;
    common::write_sample_story(dir.path())?;
    let controller = controller_for(dir.path())?;

    // 3 merged lines exist (2 reference + 1 model-only); 4 is out of range
    assert!(controller.render_line("Anansesem01", 4, DisplayOptions::default()).is_err());
    assert!(controller.render_line("Anansesem01", 0, DisplayOptions::default()).is_err());
    assert!(controller.render_line("Anansesem01", 3, DisplayOptions::default()).is_ok());
    Ok(())
}

/// Test the navigator table highlights the selected line
#[test]
fn test_render_navigator_withSelectedLine_shouldMarkRow() -> Result<()> {
    let dir = common::create_temp_dir()?;
    common::write_sample_story(dir.path())?;
    let controller = controller_for(dir.path())?;

    let html = controller.render_navigator("Anansesem01", 2)?;
    assert!(html.contains("selected-line=\"true\""));
    assert!(html.contains("Ananse koo kurom."));
    assert!(html.contains("scrollIntoView"));

    // Only one row may be selected
    assert_eq!(html.matches("selected-line").count(), 2); // row attr + script query
    Ok(())
}
