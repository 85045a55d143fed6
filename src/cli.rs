use clap::Parser;

pub const USAGE_TEXT: &str = r#"authform: interactive scaffolder for auth-em-form components

Usage:
  authform              run the interactive scaffolding flow
  authform -h | --help  print this help plus the component option glossary

Flow:
  - Pick a package manager (npm|yarn|pnpm); pnpm additionally asks about workspaces.
  - auth-em-form is installed into the nearest directory holding a package.json
    (the current directory, or the first match found in its subtree).
  - Answer the component prompts; the generated file lands at <folder>/<name>.<ext>.
"#;

pub const GLOSSARY_TEXT: &str = r#"AuthForm component options:
  headingText: The heading text displayed on the authentication form.
  action: The action type of the form, either 'signIn' or 'signUp'.
  fields: An array of field configurations defining the form fields.
  onSubmit: Callback function invoked when the form is submitted.
  customStyles: Custom styles to apply to form elements.
  validation: Enable or disable form validation.
  validationErrors: Object containing validation errors for form fields.
  submitIcon: Icon component to display next to the submit button.
  submitIconPosition: Position of the submit icon, either 'left' or 'right'.
  encryptPassword: Boolean indicating whether to encrypt passwords using bcrypt.
  saltRounds: Number of salt rounds used for password encryption.
  customValidationSchema: Custom Yup validation schema for form fields.
  socialLoginEnabled: Enable or disable social login integration.
  socialLoginPosition: Position of social login buttons, either 'top' or 'bottom'.
  socialLoginStyles: Custom styles to apply to social login buttons.
  socialLoginProviders: Array of social login provider configurations or provider names.
  socialButtonOptions: Options for social login buttons.
  onSocialLogin: Callback function invoked when a social login provider button is clicked.
  integratedComponents: Integrated components to include in the form.
"#;

#[derive(Parser, Debug)]
#[command(name = "authform")]
#[command(disable_help_flag = true)]
#[command(disable_version_flag = true)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Print usage and the component option glossary
    #[arg(short = 'h', long = "help")]
    pub help: bool,
}
