use anyhow::{anyhow, Context, Result};
use regex::Regex;
use std::io::{self, BufRead, Write};

fn re_identifier() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("regex"))
}

/// Blocking line-based prompts. Questions are printed to stderr so stdout
/// stays reserved for the package manager's own streamed output.
pub struct Prompter<R> {
    input: R,
}

impl Prompter<io::StdinLock<'static>> {
    pub fn stdin() -> Self {
        Prompter::new(io::stdin().lock())
    }
}

impl<R: BufRead> Prompter<R> {
    pub fn new(input: R) -> Self {
        Prompter { input }
    }

    fn ask(&mut self, msg: &str) -> Result<String> {
        eprint!("{msg} ");
        io::stderr().flush().ok();

        let mut s = String::new();
        let n = self.input.read_line(&mut s).context("read user input")?;
        if n == 0 {
            return Err(anyhow!("unexpected end of input"));
        }
        Ok(s.trim().to_string())
    }

    /// Free text; empty answers are re-asked.
    pub fn input(&mut self, msg: &str) -> Result<String> {
        loop {
            let ans = self.ask(msg)?;
            if !ans.is_empty() {
                return Ok(ans);
            }
        }
    }

    /// Free text; an empty answer yields the default.
    pub fn input_default(&mut self, msg: &str, default: &str) -> Result<String> {
        let ans = self.ask(msg)?;
        if ans.is_empty() {
            Ok(default.to_string())
        } else {
            Ok(ans)
        }
    }

    /// Free text constrained to a JS identifier (component names).
    pub fn identifier(&mut self, msg: &str) -> Result<String> {
        loop {
            let ans = self.ask(msg)?;
            if re_identifier().is_match(&ans) {
                return Ok(ans);
            }
            eprintln!("Please enter a valid identifier.");
        }
    }

    /// Pick one of `choices`; accepts the 1-based index or the literal
    /// choice text (case-insensitive). An empty answer picks the first
    /// choice. Returns the index into `choices`.
    pub fn select(&mut self, msg: &str, choices: &[&str]) -> Result<usize> {
        let full = format!("{msg} [{}]", choices.join("/"));
        loop {
            let ans = self.ask(&full)?;
            if ans.is_empty() {
                return Ok(0);
            }
            if let Ok(i) = ans.parse::<usize>() {
                if (1..=choices.len()).contains(&i) {
                    return Ok(i - 1);
                }
            }
            if let Some(i) = choices.iter().position(|c| c.eq_ignore_ascii_case(&ans)) {
                return Ok(i);
            }
            eprintln!("Please choose one of: {}.", choices.join(", "));
        }
    }

    /// Strict yes/no: only the literal y or n (case-insensitive) is
    /// accepted, anything else re-prompts.
    pub fn confirm(&mut self, msg: &str) -> Result<bool> {
        loop {
            let ans = self.ask(msg)?.to_lowercase();
            match ans.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => eprintln!("Please enter y/n."),
            }
        }
    }

    /// Unsigned integer; re-asks on parse failure.
    pub fn number(&mut self, msg: &str) -> Result<u32> {
        loop {
            let ans = self.ask(msg)?;
            match ans.parse::<u32>() {
                Ok(n) => return Ok(n),
                Err(_) => eprintln!("Please enter a number."),
            }
        }
    }
}
