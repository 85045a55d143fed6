use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::answers::AnswerSet;
use crate::ui;

/// Substitute the answers into the component template. Values land in the
/// output verbatim; a heading containing a double quote produces a broken
/// component. Known limitation of the flat template.
pub fn render(a: &AnswerSet) -> String {
    let encrypt = a.encrypt_password.unwrap_or(false);
    let rounds = a.salt_rounds.unwrap_or(10);

    // Only an enabled social login carries a position; a disabled one must
    // not emit the attribute at all.
    let position = match a.social_login_position {
        Some(p) => format!("\n            socialLoginPosition=\"{}\"", p.as_str()),
        None => String::new(),
    };

    format!(
        r#"import React from "react";
import AuthForm from "auth-em-form";

const {name}: React.FC = () => {{
    const handleSubmit = (
        formData: {{ [key: string]: string }},
        action: "signIn" | "signUp"
    ) => {{
        // Your sign-up logic here
        console.log("Sign up form submitted with data:", formData);
    }};

    return (
        <AuthForm
            headingText="{heading}"
            action="{action}"
            onSubmit={{handleSubmit}}
            validation={{{validation}}}
            encryptPassword={{{encrypt}}}
            saltRounds={{{rounds}}}
            socialLoginEnabled={{{social}}}{position}
            onSocialLogin={{undefined}}
        />
    );
}};

export default {name};
"#,
        name = a.component_name,
        heading = a.heading_text,
        action = a.action.as_str(),
        validation = a.validation,
        encrypt = encrypt,
        rounds = rounds,
        social = a.social_login_enabled,
        position = position,
    )
}

/// Render and write `<folder>/<file>.<ext>`, creating the folder tree first.
/// An existing file at that path is silently overwritten.
pub fn generate(log: &ui::Logger, a: &AnswerSet) -> Result<PathBuf> {
    let folder = PathBuf::from(&a.folder);
    fs::create_dir_all(&folder).with_context(|| format!("mkdir {}", folder.display()))?;

    let path = folder.join(format!("{}.{}", a.file_name, a.extension));
    fs::write(&path, render(a)).with_context(|| format!("write {}", path.display()))?;

    log.infof(&format!(
        "AuthForm component generated successfully at {}!",
        path.display()
    ));
    Ok(path)
}
