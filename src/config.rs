use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::helpers::temp;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Name prefix of the temporary file
    #[arg(short = 'f', long = "file-prefix", default_value_t = String::from("sample"))]
    pub file_prefix: String,

    /// Name prefix of the temporary directory
    #[arg(short = 'd', long = "dir-prefix", default_value_t = String::from("sampledir"))]
    pub dir_prefix: String,

    /// Where to create the temporary entries (default: system temp directory)
    #[arg(short = 't', long = "tmp-root")]
    pub tmp_root: Option<PathBuf>,

    /// Keep the temporary entries instead of removing them
    #[arg(short = 'k', long)]
    pub keep: bool,

    /// Print the run report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug)]
pub struct Config {
    pub file_prefix: String,
    pub dir_prefix: String,
    pub tmp_root: Option<PathBuf>,
    pub keep: bool,
    pub json: bool,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        if let Some(root) = &args.tmp_root {
            if !root.is_dir() {
                bail!("Temp root {} is not an existing directory", root.display())
            }
        }
        temp::check_prefix(&args.file_prefix)?;
        temp::check_prefix(&args.dir_prefix)?;
        Ok(Self {
            file_prefix: args.file_prefix,
            dir_prefix: args.dir_prefix,
            tmp_root: args.tmp_root,
            keep: args.keep,
            json: args.json,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file_prefix: "sample".to_string(),
            dir_prefix: "sampledir".to_string(),
            tmp_root: None,
            keep: false,
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use tempfile::{NamedTempFile, tempdir};

    use super::*;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_the_demo() {
        let config = Config::new(Args::try_parse_from(["scratch-temp"]).unwrap()).unwrap();
        assert_eq!(config.file_prefix, "sample");
        assert_eq!(config.dir_prefix, "sampledir");
        assert!(config.tmp_root.is_none());
        assert!(!config.keep);
        assert!(!config.json);
    }

    #[test]
    fn flags_are_parsed() {
        let root = tempdir().unwrap();
        let root_arg = root.path().to_str().unwrap();
        let args = Args::try_parse_from([
            "scratch-temp",
            "-f",
            "foo",
            "--dir-prefix",
            "bar",
            "--tmp-root",
            root_arg,
            "--keep",
            "--json",
        ])
        .unwrap();
        let config = Config::new(args).unwrap();
        assert_eq!(config.file_prefix, "foo");
        assert_eq!(config.dir_prefix, "bar");
        assert_eq!(config.tmp_root.as_deref(), Some(root.path()));
        assert!(config.keep);
        assert!(config.json);
    }

    #[test]
    fn missing_tmp_root_is_rejected() {
        let root = tempdir().unwrap();
        let missing = root.path().join("nope");
        let args =
            Args::try_parse_from(["scratch-temp", "--tmp-root", missing.to_str().unwrap()])
                .unwrap();
        assert!(Config::new(args).is_err());
    }

    #[test]
    fn regular_file_tmp_root_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let args =
            Args::try_parse_from(["scratch-temp", "-t", file.path().to_str().unwrap()]).unwrap();
        assert!(Config::new(args).is_err());
    }

    #[test]
    fn prefixes_with_separators_are_rejected() {
        let args = Args::try_parse_from(["scratch-temp", "-f", "../escaped"]).unwrap();
        assert!(Config::new(args).is_err());
        let args = Args::try_parse_from(["scratch-temp", "-d", "nested/dir"]).unwrap();
        assert!(Config::new(args).is_err());
    }
}
