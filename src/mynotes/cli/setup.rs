use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mynotes", bin_name = "mynotes", version)]
#[command(about = "Subject-organized note keeper", long_about = None)]
pub struct Cli {
    /// Directory holding the notes files (defaults to the current directory)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Username (prompted for when omitted)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Account password (prompted for when omitted)
    #[arg(short, long)]
    pub password: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_no_args() {
        let cli = Cli::try_parse_from(["mynotes"]).unwrap();
        assert!(cli.dir.is_none());
        assert!(cli.username.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "mynotes", "--dir", "/tmp/n", "-u", "alice", "-p", "pw", "-v",
        ])
        .unwrap();
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/n")));
        assert_eq!(cli.username.as_deref(), Some("alice"));
        assert_eq!(cli.password.as_deref(), Some("pw"));
        assert!(cli.verbose);
    }
}
