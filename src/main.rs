use anyhow::Context;
use log::info;

use bitmap_distance::bench::runner::run_cases;
use bitmap_distance::config::{Config, USAGE};
use bitmap_distance::perception::bitmap::{parse_cases, parse_cases_json, read_input, render_json, render_text};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cfg = Config::from_args(std::env::args().skip(1))?;
    if cfg.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let input = read_input(cfg.input.as_deref())?;
    let cases = if cfg.json_in {
        parse_cases_json(&input)?
    } else {
        parse_cases(&input).context("malformed test case input")?
    };
    info!("loaded {} test cases", cases.len());

    let report = run_cases(&cases, cfg.verify);
    if cfg.report {
        report.print_detail();
    }
    if report.mismatches > 0 {
        anyhow::bail!("{} case(s) failed verification", report.mismatches);
    }

    if cfg.json_out {
        println!("{}", render_json(&report.results)?);
    } else {
        for dist in &report.results {
            let text = render_text(dist, cfg.mark_unreachable);
            if !text.is_empty() {
                println!("{}", text);
            }
        }
    }
    Ok(())
}
