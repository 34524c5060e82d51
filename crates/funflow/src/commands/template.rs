use super::locate_template;
use anyhow::Context;
use funflow_core::{detect_override, load_template};
use std::path::PathBuf;

pub fn handle(no_build: bool, custom: &[PathBuf], json: bool) -> anyhow::Result<()> {
    let (_, template) = locate_template(no_build, custom)?;

    let mut files = vec![template.clone()];
    if let Some(override_file) = detect_override(&template) {
        files.push(override_file);
    }

    let merged = load_template(&files)
        .with_context(|| format!("failed to load {}", template.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&merged)?);
    } else {
        print!("{}", serde_yaml::to_string(&merged)?);
    }
    Ok(())
}
