//! Commands accepted by the interactive page and on the command line.
use std::path::PathBuf;

use eyre::{bail, eyre};

/// Default configuration file.
pub(crate) const DEFAULT_CONFIG: &str = "vault-panel.toml";

pub(crate) const USAGE: &str = "\
usage:
  vault-panel [--config PATH]     open the vault page
  vault-panel extension DIR       write the extension's *.args.mjs files
  vault-panel help                show this message";

pub(crate) const PAGE_HELP: &str = "\
commands:
  show                  render the page
  refresh               read balances again
  mint                  press \"Mint 100 Tokens\"
  approve               press \"Approve Tokens\"
  deposit AMOUNT        type AMOUNT into the deposit input
  deposit max           press \"Max\" next to the deposit input
  deposit clear         empty the deposit input
  deposit submit        press \"Deposit\"
  redeem AMOUNT         type AMOUNT into the redeem input
  redeem max            press \"Max\" next to the redeem input
  redeem clear          empty the redeem input
  redeem submit         press \"Redeem\"
  help                  show this message
  quit                  leave";

/// What the binary was asked to do.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Invocation {
    /// Open the page with the given configuration file.
    Page { config: PathBuf },
    /// Write the extension files under `dir`.
    Extension { dir: PathBuf },
    /// Print usage.
    Help,
}

impl Invocation {
    pub(crate) fn parse<I, S>(args: I) -> eyre::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut args = args.into_iter().map(Into::into);
        let mut config = PathBuf::from(DEFAULT_CONFIG);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "help" | "--help" | "-h" => return Ok(Invocation::Help),
                "--config" | "-c" => {
                    let path = args
                        .next()
                        .ok_or_else(|| eyre!("--config expects a path"))?;
                    config = PathBuf::from(path);
                }
                "extension" => {
                    let dir = args
                        .next()
                        .ok_or_else(|| eyre!("extension expects a directory"))?;
                    if let Some(extra) = args.next() {
                        bail!("unexpected argument {extra:?}");
                    }
                    let dir = PathBuf::from(dir);
                    return Ok(Invocation::Extension { dir });
                }
                other => bail!("unexpected argument {other:?}\n\n{USAGE}"),
            }
        }

        Ok(Invocation::Page { config })
    }
}

/// Which amount input a command targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Form {
    Deposit,
    Redeem,
}

/// One line typed into the page.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Show,
    Refresh,
    Mint,
    Approve,
    Type(Form, String),
    Max(Form),
    Submit(Form),
    Help,
    Quit,
}

impl Command {
    pub(crate) fn parse(line: &str) -> eyre::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(Command::Show);
        };
        let rest: Vec<&str> = words.collect();

        let command = match (head, rest.as_slice()) {
            ("show", []) => Command::Show,
            ("refresh", []) => Command::Refresh,
            ("mint", []) => Command::Mint,
            ("approve", []) => Command::Approve,
            ("help" | "?", []) => Command::Help,
            ("quit" | "exit" | "q", []) => Command::Quit,
            ("deposit" | "redeem", [argument]) => {
                let form = match head {
                    "deposit" => Form::Deposit,
                    _ => Form::Redeem,
                };
                match *argument {
                    "max" => Command::Max(form),
                    "submit" => Command::Submit(form),
                    "clear" => Command::Type(form, String::new()),
                    amount => Command::Type(form, amount.to_owned()),
                }
            }
            ("deposit" | "redeem", []) => {
                bail!("{head} expects an amount, `max`, `clear` or `submit`")
            }
            _ => bail!("unknown command {line:?}, type `help` for the list"),
        };
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_page_with_default_config() {
        assert_eq!(
            Invocation::parse(Vec::<String>::new()).unwrap(),
            Invocation::Page { config: PathBuf::from(DEFAULT_CONFIG) }
        );
    }

    #[test]
    fn parses_config_and_extension_invocations() {
        assert_eq!(
            Invocation::parse(["--config", "local.toml"]).unwrap(),
            Invocation::Page { config: PathBuf::from("local.toml") }
        );
        assert_eq!(
            Invocation::parse(["extension", "out"]).unwrap(),
            Invocation::Extension { dir: PathBuf::from("out") }
        );
        assert_eq!(Invocation::parse(["--help"]).unwrap(), Invocation::Help);
    }

    #[test]
    fn rejects_incomplete_invocations() {
        assert!(Invocation::parse(["--config"]).is_err());
        assert!(Invocation::parse(["extension"]).is_err());
        assert!(Invocation::parse(["extension", "a", "b"]).is_err());
        assert!(Invocation::parse(["deploy"]).is_err());
    }

    #[test]
    fn parses_page_commands() {
        assert_eq!(Command::parse("").unwrap(), Command::Show);
        assert_eq!(Command::parse("  mint ").unwrap(), Command::Mint);
        assert_eq!(Command::parse("approve").unwrap(), Command::Approve);
        assert_eq!(
            Command::parse("deposit 1.5").unwrap(),
            Command::Type(Form::Deposit, "1.5".to_owned())
        );
        assert_eq!(
            Command::parse("redeem max").unwrap(),
            Command::Max(Form::Redeem)
        );
        assert_eq!(
            Command::parse("deposit submit").unwrap(),
            Command::Submit(Form::Deposit)
        );
        assert_eq!(
            Command::parse("redeem clear").unwrap(),
            Command::Type(Form::Redeem, String::new())
        );
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_unknown_commands() {
        assert!(Command::parse("withdraw 1").is_err());
        assert!(Command::parse("deposit").is_err());
        assert!(Command::parse("mint 5").is_err());
    }
}
