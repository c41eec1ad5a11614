use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use clinify_assessments::error::AssessmentError;
use clinify_assessments::get_assessment;
use clinify_core::models::template::{NormalizedTemplate, TemplateOverride};
use clinify_templates::backend::{BackendTemplate, adapt_backend_template};
use clinify_templates::progress::{NavigationItem, NoteProgress, note_progress, section_navigation};
use clinify_templates::{
    generate_default_config, merge_template_config, normalize_template, parse_template_config,
    validate_section_data,
};

use crate::config::{ToolConfig, save_config};

fn read_json(path: &Path) -> eyre::Result<Value> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    Ok(serde_json::from_str(&contents)?)
}

fn print_json<T: Serialize>(value: &T) -> eyre::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn load_template(path: &Path) -> eyre::Result<NormalizedTemplate> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read {}: {e}", path.display()))?;
    Ok(parse_template_config(contents)?)
}

pub fn normalize(file: &Path) -> eyre::Result<()> {
    let template = load_template(file)?;
    info!(
        template_id = %template.template_id,
        sections = template.sections.len(),
        "template normalized"
    );
    print_json(&template)
}

/// Override file for a template: the explicit path, else
/// `<overrides_dir>/<templateId>.json` when it exists.
pub fn resolve_override(
    explicit: Option<&Path>,
    template_id: &str,
    config: &ToolConfig,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let candidate = config
        .overrides_dir
        .as_ref()?
        .join(format!("{template_id}.json"));
    candidate.exists().then_some(candidate)
}

pub fn default_template(
    discipline: &str,
    note_type: &str,
    override_file: Option<&Path>,
    normalize: bool,
    config: &ToolConfig,
) -> eyre::Result<()> {
    let base = generate_default_config(discipline, note_type);

    let custom: Option<TemplateOverride> =
        match resolve_override(override_file, &base.template_id, config) {
            Some(path) => {
                info!(path = %path.display(), "merging template override");
                Some(serde_json::from_value(read_json(&path)?)?)
            }
            None => None,
        };

    let merged = merge_template_config(&base, custom.as_ref());
    if normalize {
        print_json(&normalize_template(&merged)?)
    } else {
        print_json(&*merged)
    }
}

pub fn validate(template: &Path, section_id: &str, data: &Path) -> eyre::Result<ExitCode> {
    let template = load_template(template)?;
    let section = template.section(section_id).ok_or_else(|| {
        let ids: Vec<&str> = template.sections.iter().map(|s| s.id.as_str()).collect();
        eyre::eyre!(
            "section '{section_id}' not found in template '{}' (sections: {})",
            template.template_id,
            ids.join(", ")
        )
    })?;

    let result = validate_section_data(&read_json(data)?, &section.rules);
    for warning in &result.warnings {
        warn!(section = section_id, "{warning}");
    }
    print_json(&result)?;

    Ok(if result.is_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[derive(Serialize)]
struct ProgressOutput {
    sections: Vec<NavigationItem>,
    progress: NoteProgress,
}

pub fn progress(template: &Path, note_data: &Path) -> eyre::Result<()> {
    let template = load_template(template)?;
    let sections = section_navigation(&template, &read_json(note_data)?);
    let progress = note_progress(&sections);
    print_json(&ProgressOutput { sections, progress })
}

pub fn adapt(file: &Path, config: &ToolConfig) -> eyre::Result<()> {
    let backend: BackendTemplate = serde_json::from_value(read_json(file)?)?;
    let adapted = adapt_backend_template(&backend);

    if config.strict_components && !adapted.report.is_usable() {
        return Err(eyre::eyre!(
            "backend template '{}' is not renderable: {} of {} sections usable",
            adapted.config.template_id,
            adapted.report.valid_sections,
            adapted.report.total_sections
        ));
    }
    print_json(&adapted)
}

pub fn score(assessment: &str, responses: &Path) -> eyre::Result<()> {
    let assessment = get_assessment(assessment)
        .ok_or_else(|| AssessmentError::UnknownAssessment(assessment.to_string()))?;
    let result = assessment.score(&read_json(responses)?)?;
    info!(
        assessment = assessment.id(),
        total = result.total,
        level = %result.interpretation.level,
        "assessment scored"
    );
    print_json(&result)
}

pub fn init_config(path: &Path) -> eyre::Result<()> {
    if path.exists() {
        return Err(eyre::eyre!("config already exists at {}", path.display()));
    }
    save_config(path, &ToolConfig::default())
}
