use super::locate_template;
use colored::Colorize;
use funflow_core::ProjectLayout;
use std::path::Path;

pub fn handle(no_build: bool, custom: Option<&Path>) -> anyhow::Result<()> {
    let custom: Vec<_> = custom.map(Path::to_path_buf).into_iter().collect();
    let (locator, template) = locate_template(no_build, &custom)?;
    let layout = ProjectLayout::derive(&template, locator.cwd());

    let rows = [
        ("template", template.as_path()),
        ("base dir", layout.base_dir.as_path()),
        ("root base dir", layout.root_base_dir.as_path()),
        ("root template", layout.root_template.as_path()),
        ("nas yml", layout.nas_yml.as_path()),
        ("local tmp dir", layout.local_tmp_dir.as_path()),
        ("nas base dir", layout.nas_base_dir.as_path()),
    ];
    for (label, path) in rows {
        println!("{:<14} {}", format!("{}:", label).cyan(), path.display());
    }
    Ok(())
}
