// Command-line configuration for the front end.

pub const USAGE: &str = "\
usage: bitmap-distance [OPTIONS] [INPUT]

Reads test cases from INPUT (or stdin) and prints one distance grid per case.

options:
  --json          read a JSON array of {\"grid\": [[..]]} records
  --json-out      print results as JSON; \"sources\": 0 marks a grid with no marked cell
  --verify        cross-check every case against per-cell search
  --unreachable   print '-' for grids that contain no marked cell
  --report        print a per-case timing report to stderr
  -h, --help      show this message

RUST_LOG controls diagnostic logging (e.g. RUST_LOG=debug).";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub input: Option<String>,
    pub json_in: bool,
    pub json_out: bool,
    pub verify: bool,
    pub mark_unreachable: bool,
    pub report: bool,
    pub help: bool,
}

impl Config {
    pub fn from_args<I, S>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cfg = Config::default();
        for arg in args.into_iter().map(Into::into) {
            match arg.as_str() {
                "--json" => cfg.json_in = true,
                "--json-out" => cfg.json_out = true,
                "--verify" => cfg.verify = true,
                "--unreachable" => cfg.mark_unreachable = true,
                "--report" => cfg.report = true,
                "-h" | "--help" => cfg.help = true,
                flag if flag.starts_with('-') && flag != "-" => {
                    anyhow::bail!("unknown option {:?}\n\n{}", flag, USAGE)
                }
                path => {
                    if let Some(prev) = &cfg.input {
                        anyhow::bail!("more than one input given: {:?} and {:?}", prev, path);
                    }
                    // "-" is an explicit request for stdin.
                    if path != "-" {
                        cfg.input = Some(path.to_string());
                    }
                }
            }
        }
        Ok(cfg)
    }
}
