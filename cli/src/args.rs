//! Command-line arguments.

use anyhow::{Context, Result, bail};
use std::env;

use snippets_types::SiblingPolicy;

/// Picks the demonstrations when no positional argument is given.
pub const DEMO_ENV_VAR: &str = "SNIPPETS_DEMO";

pub const USAGE: &str = "\
usage: snippets [chain|await|join|example|features|all] [--fail] [--json] [--policy detach|abort|drain]

  chain      continuation-style three-stage chain
  await      the same chain written with .await
  join       start several producers at once and join them in input order
  example    counter with an async accessor
  features   language-feature rules
  all        everything above (default)

  --fail     make the producer fail (join: the middle producer fails)
  --json     print one JSON object per demonstration
  --policy   what a failing join does with its siblings";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Demo {
    Chain,
    Await,
    Join,
    Example,
    Features,
}

impl Demo {
    pub const ALL: [Demo; 5] = [
        Demo::Chain,
        Demo::Await,
        Demo::Join,
        Demo::Example,
        Demo::Features,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Demo::Chain => "chain",
            Demo::Await => "await",
            Demo::Join => "join",
            Demo::Example => "example",
            Demo::Features => "features",
        }
    }

    /// `None` for an unknown name; `Some(ALL)` for `all`.
    fn parse(raw: &str) -> Option<Vec<Self>> {
        let demo = match raw.trim().to_ascii_lowercase().as_str() {
            "all" => return Some(Demo::ALL.to_vec()),
            "chain" => Demo::Chain,
            "await" | "async" => Demo::Await,
            "join" | "concurrent" => Demo::Join,
            "example" | "counter" => Demo::Example,
            "features" => Demo::Features,
            _ => return None,
        };
        Some(vec![demo])
    }

    fn from_env() -> Option<Vec<Self>> {
        match env::var(DEMO_ENV_VAR) {
            Ok(value) => {
                let parsed = Self::parse(&value);
                if parsed.is_none() {
                    tracing::warn!("Unknown demo in {DEMO_ENV_VAR}: {value}");
                }
                parsed
            }
            Err(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub demos: Vec<Demo>,
    pub fail: bool,
    pub json: bool,
    pub policy: Option<SiblingPolicy>,
    pub help: bool,
}

impl Args {
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut demos = None;
        let mut fail = false;
        let mut json = false;
        let mut policy = None;
        let mut help = false;

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--fail" => fail = true,
                "--json" => json = true,
                "-h" | "--help" => help = true,
                "--policy" => {
                    let raw = iter.next().context("--policy needs a value")?;
                    policy = Some(raw.parse::<SiblingPolicy>()?);
                }
                flag if flag.starts_with('-') => bail!("unknown flag `{flag}`\n\n{USAGE}"),
                name => {
                    if demos.is_some() {
                        bail!("only one demonstration can be named\n\n{USAGE}");
                    }
                    let parsed = Demo::parse(name)
                        .with_context(|| format!("unknown demonstration `{name}`\n\n{USAGE}"))?;
                    demos = Some(parsed);
                }
            }
        }

        Ok(Self {
            demos: demos
                .or_else(Demo::from_env)
                .unwrap_or_else(|| Demo::ALL.to_vec()),
            fail,
            json,
            policy,
            help,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(ToString::to_string))
    }

    #[test]
    fn single_demo_and_flags() {
        let args = parse(&["join", "--fail", "--json", "--policy", "abort"]).unwrap();
        assert_eq!(args.demos, vec![Demo::Join]);
        assert!(args.fail);
        assert!(args.json);
        assert_eq!(args.policy, Some(SiblingPolicy::Abort));
        assert!(!args.help);
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(parse(&["async"]).unwrap().demos, vec![Demo::Await]);
        assert_eq!(parse(&["CONCURRENT"]).unwrap().demos, vec![Demo::Join]);
        assert_eq!(parse(&["all"]).unwrap().demos, Demo::ALL.to_vec());
    }

    #[test]
    fn unknown_inputs_are_rejected() {
        assert!(parse(&["promise"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["--policy"]).is_err());
        assert!(parse(&["--policy", "cancel"]).is_err());
        assert!(parse(&["chain", "join"]).is_err());
    }

    #[test]
    fn help_flag() {
        assert!(parse(&["--help"]).unwrap().help);
    }
}
