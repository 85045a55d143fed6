use anyhow::Result;
use std::path::Path;

use crate::manifest;
use crate::pm::PackageManager;
use crate::ui;
use crate::util::{run_cmd, which};

/// Locate the nearest project directory and install `package` there with
/// the chosen manager. Returns the process exit code: 1 when no manifest
/// exists (nothing is spawned in that case) or when the child fails.
pub fn install_package(
    log: &ui::Logger,
    start: &Path,
    package: &str,
    manager: PackageManager,
    workspace: bool,
) -> Result<i32> {
    let Some(project_dir) = manifest::find_project_dir(start)? else {
        log.errorf("package.json not found in the current directory or its subdirectories");
        return Ok(1);
    };

    match manifest::project_name(&project_dir) {
        Some(name) => log.infof(&format!(
            "installing into \"{name}\" ({})",
            project_dir.display()
        )),
        None => log.infof(&format!("installing into {}", project_dir.display())),
    }

    if which(manager.as_str()).is_none() {
        log.errorf(&format!(
            "{} not found on PATH; install it or pick another package manager",
            manager.as_str()
        ));
        return Ok(1);
    }

    let (cmd, args) = manager.install_command(package, workspace);
    log.infof(&format!("install: {cmd} {}", args.join(" ")));

    let arg_refs: Vec<&str> = args.iter().map(|s| s.as_str()).collect();
    if let Err(e) = run_cmd(&project_dir, &cmd, &arg_refs) {
        log.errorf(&format!("error occurred while installing {package}: {e}"));
        return Ok(1);
    }

    log.infof(&format!("{package} has been successfully installed."));
    Ok(0)
}
