use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use pathviz_core::VizConfig;
use pathviz_term::logger::{self, FileLogger};

fn load_config(path: Option<PathBuf>) -> anyhow::Result<VizConfig> {
    let Some(path) = path else {
        return Ok(VizConfig::default());
    };
    let text =
        fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
    VizConfig::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cfg = load_config(std::env::args_os().nth(1).map(PathBuf::from))?;
    if let Some(path) = &cfg.log_file {
        FileLogger::open(path, logger::level_from_env())
            .with_context(|| format!("opening log file {}", path.display()))?
            .install()?;
    }
    pathviz_term::run(cfg)
}
