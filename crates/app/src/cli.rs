use std::str::FromStr;

use clap::{Parser, Subcommand, ValueEnum};

/// Output mode for every command.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Top-level CLI parser for the `progress` binary.
#[derive(Debug, Parser)]
#[command(name = "progress", version, about = "Personal progress tracker")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format: json, table
    #[arg(short, long, global = true, env = "PROGRESS_FORMAT", default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List workout templates
    Templates,
    /// Show the exercises of one template
    View {
        /// Template id (e.g. `a`)
        id: String,
    },
    /// Log a workout session from a template
    Log {
        /// Template id (e.g. `a`)
        id: String,
        /// Fill a set: `<exercise>:<set>:<weight>:<reps>` (set numbers start at 1)
        #[arg(long = "set", value_name = "ENTRY")]
        sets: Vec<SetArg>,
        /// Copy the previous set into `<exercise>:<set>`, applied after `--set`
        #[arg(long = "copy", value_name = "REF")]
        copies: Vec<CopyArg>,
    },
    /// Show the task list
    Tasks,
}

/// One `--set` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetArg {
    pub exercise: String,
    pub index: usize,
    pub weight: String,
    pub reps: String,
}

/// One `--copy` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyArg {
    pub exercise: String,
    pub index: usize,
}

fn parse_set_number(raw: &str) -> Result<usize, String> {
    let number: usize = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid set number: {raw}"))?;
    number
        .checked_sub(1)
        .ok_or_else(|| "set numbers start at 1".to_string())
}

impl FromStr for SetArg {
    type Err = String;

    // Split from the right so exercise names may contain ':'.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.rsplitn(4, ':');
        let (Some(reps), Some(weight), Some(set), Some(exercise)) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("expected <exercise>:<set>:<weight>:<reps>, got `{s}`"));
        };
        Ok(Self {
            exercise: exercise.to_owned(),
            index: parse_set_number(set)?,
            weight: weight.trim().to_owned(),
            reps: reps.trim().to_owned(),
        })
    }
}

impl FromStr for CopyArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (exercise, set) = s
            .rsplit_once(':')
            .ok_or_else(|| format!("expected <exercise>:<set>, got `{s}`"))?;
        Ok(Self {
            exercise: exercise.to_owned(),
            index: parse_set_number(set)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_collects_sets_and_copies() {
        let cli = Cli::try_parse_from([
            "progress",
            "--format",
            "json",
            "log",
            "a",
            "--set",
            "Supino Inclinado (halter):1:40:10",
            "--copy",
            "Supino Inclinado (halter):2",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        let Command::Log { id, sets, copies } = cli.command else {
            panic!("expected log command");
        };
        assert_eq!(id, "a");
        assert_eq!(
            sets,
            vec![SetArg {
                exercise: "Supino Inclinado (halter)".into(),
                index: 0,
                weight: "40".into(),
                reps: "10".into(),
            }]
        );
        assert_eq!(
            copies,
            vec![CopyArg {
                exercise: "Supino Inclinado (halter)".into(),
                index: 1,
            }]
        );
    }

    #[test]
    fn set_arg_allows_blank_fields() {
        let arg: SetArg = "Hack:2::8".parse().unwrap();
        assert_eq!(arg.index, 1);
        assert_eq!(arg.weight, "");
        assert_eq!(arg.reps, "8");
    }

    #[test]
    fn set_number_zero_is_rejected() {
        assert!("Hack:0:40:8".parse::<SetArg>().is_err());
        assert!("Hack:0".parse::<CopyArg>().is_err());
        assert!("Hack".parse::<CopyArg>().is_err());
    }
}
