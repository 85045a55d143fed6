use anyhow::Result;
use std::io::BufRead;

use crate::pm::PackageManager;
use crate::prompt::Prompter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SignIn,
    SignUp,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::SignIn => "signIn",
            Action::SignUp => "signUp",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    Top,
    Bottom,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Top => "top",
            Position::Bottom => "bottom",
        }
    }
}

/// Everything one run collects for the generator. Optional fields are None
/// when their conditional prompt never fired.
#[derive(Clone, Debug)]
pub struct AnswerSet {
    pub folder: String,
    pub file_name: String,
    pub component_name: String,
    pub extension: String,
    pub heading_text: String,
    pub action: Action,
    pub encrypt_password: Option<bool>,
    pub salt_rounds: Option<u32>,
    pub validation: bool,
    pub social_login_enabled: bool,
    pub social_login_position: Option<Position>,
}

/// Manager selection runs before anything else; the workspace question only
/// applies to pnpm.
pub fn collect_package_manager<R: BufRead>(p: &mut Prompter<R>) -> Result<(PackageManager, bool)> {
    let labels: Vec<&str> = PackageManager::ALL.iter().map(|m| m.as_str()).collect();
    let manager = PackageManager::ALL[p.select("Select your preferred package manager:", &labels)?];

    let workspace = if manager.supports_workspaces() {
        p.confirm("Are you using pnpm workspaces? (y/n):")?
    } else {
        false
    };

    Ok((manager, workspace))
}

pub fn collect<R: BufRead>(p: &mut Prompter<R>) -> Result<AnswerSet> {
    let folder = p.input_default(
        "Enter the folder to add the created component (or use \"components\" folder by default):",
        "components",
    )?;
    let file_name = p.input("Enter the file name for the component:")?;
    let component_name = p.identifier("Enter the component name:")?;

    let language = p.select(
        "Choose the language to create the component:",
        &["javascript", "typescript"],
    )?;
    let extensions: &[&str] = if language == 1 { &["ts", "tsx"] } else { &["js", "jsx"] };
    let extension = extensions[p.select("Choose the file extension:", extensions)?].to_string();

    let heading_text = p.input("Enter the heading text for the form:")?;

    let action = match p.select("Select the action type:", &["signIn", "signUp"])? {
        0 => Action::SignIn,
        _ => Action::SignUp,
    };

    let encrypt_password = if action == Action::SignUp {
        Some(p.confirm("Encrypt password for sign-up? (y/n):")?)
    } else {
        None
    };

    let salt_rounds = if encrypt_password == Some(true) {
        Some(p.number("Enter the number of salt rounds for password encryption:")?)
    } else {
        None
    };

    let validation = p.confirm("Enable validation? (y/n):")?;
    let social_login_enabled = p.confirm("Enable social login? (y/n):")?;

    let social_login_position = if social_login_enabled {
        Some(
            match p.select("Select the position of social login buttons:", &["top", "bottom"])? {
                0 => Position::Top,
                _ => Position::Bottom,
            },
        )
    } else {
        None
    };

    Ok(AnswerSet {
        folder,
        file_name,
        component_name,
        extension,
        heading_text,
        action,
        encrypt_password,
        salt_rounds,
        validation,
        social_login_enabled,
        social_login_position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()))
    }

    #[test]
    fn pnpm_selection_asks_workspace_question() {
        let mut p = prompter("pnpm\ny\n");
        let (manager, workspace) = collect_package_manager(&mut p).unwrap();
        assert_eq!(manager, PackageManager::Pnpm);
        assert!(workspace);
    }

    #[test]
    fn default_manager_is_npm_and_skips_workspace_question() {
        // Empty answer picks the first choice; no follow-up question means
        // the script needs no second line.
        let mut p = prompter("\n");
        let (manager, workspace) = collect_package_manager(&mut p).unwrap();
        assert_eq!(manager, PackageManager::Npm);
        assert!(!workspace);
    }

    #[test]
    fn sign_up_flow_asks_encryption_and_rounds() {
        let mut p = prompter(
            "\nLoginForm\nLoginForm\ntypescript\ntsx\nWelcome\nsignUp\ny\n12\ny\nn\n",
        );
        let a = collect(&mut p).unwrap();

        assert_eq!(a.folder, "components");
        assert_eq!(a.file_name, "LoginForm");
        assert_eq!(a.component_name, "LoginForm");
        assert_eq!(a.extension, "tsx");
        assert_eq!(a.heading_text, "Welcome");
        assert_eq!(a.action, Action::SignUp);
        assert_eq!(a.encrypt_password, Some(true));
        assert_eq!(a.salt_rounds, Some(12));
        assert!(a.validation);
        assert!(!a.social_login_enabled);
        assert_eq!(a.social_login_position, None);
    }

    #[test]
    fn sign_in_flow_skips_encryption_questions() {
        let mut p = prompter("widgets\nSignIn\nSignInForm\njavascript\njsx\nHello\nsignIn\nn\ny\ntop\n");
        let a = collect(&mut p).unwrap();

        assert_eq!(a.folder, "widgets");
        assert_eq!(a.extension, "jsx");
        assert_eq!(a.action, Action::SignIn);
        assert_eq!(a.encrypt_password, None);
        assert_eq!(a.salt_rounds, None);
        assert!(!a.validation);
        assert!(a.social_login_enabled);
        assert_eq!(a.social_login_position, Some(Position::Top));
    }

    #[test]
    fn declined_encryption_skips_salt_rounds() {
        let mut p = prompter("\nForm\nForm\njavascript\njs\nHi\nsignUp\nn\ny\nn\n");
        let a = collect(&mut p).unwrap();

        assert_eq!(a.encrypt_password, Some(false));
        assert_eq!(a.salt_rounds, None);
        assert!(a.validation);
    }

    #[test]
    fn typescript_narrows_extension_choices() {
        // "js" is not a valid answer once typescript was picked; the prompt
        // re-asks until a ts extension arrives.
        let mut p = prompter("\nForm\nForm\ntypescript\njs\nts\nHi\nsignIn\nn\nn\n");
        let a = collect(&mut p).unwrap();
        assert_eq!(a.extension, "ts");
    }
}
