#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    pub fn supports_workspaces(&self) -> bool {
        matches!(self, PackageManager::Pnpm)
    }

    /// Build the install invocation for `package`. The workspace modifier
    /// only applies to managers that support it.
    pub fn install_command(&self, package: &str, workspace: bool) -> (String, Vec<String>) {
        let verb = match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn | PackageManager::Pnpm => "add",
        };
        let mut args = vec![verb.to_string(), package.to_string()];
        if workspace && self.supports_workspaces() {
            args.push("--workspace".to_string());
        }
        (self.as_str().to_string(), args)
    }
}
