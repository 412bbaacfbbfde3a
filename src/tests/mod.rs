mod session;

use std::path::{Path, PathBuf};

use anyhow::{ensure, Result};

use crate::{run, Args};

pub const OUTDIR: &'_ str = "tmp/test-output/";

fn ensure_dir(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    ensure!(dir.is_dir(), "{dir:?} should be a directory");
    Ok(())
}

pub fn init_test_logger() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .format_timestamp(None)
        .format_target(false)
        .is_test(true)
        .try_init();
}

/// Run a whole session from `body` (YAML without `name` and `outdir`), returning its output directory.
pub fn run_session(name: &str, body: &str) -> Result<PathBuf> {
    init_test_logger();
    ensure_dir(&OUTDIR)?;

    let outdir = Path::new(OUTDIR).join(name);
    if outdir.exists() {
        std::fs::remove_dir_all(&outdir)?;
    }

    let config = format!("name: {name}\noutdir: {}\n{body}", outdir.display());
    let config_path = Path::new(OUTDIR).join(format!("session-{name}")).with_extension("yaml");
    std::fs::write(&config_path, config)?;

    run(Args { config: config_path })?;

    Ok(outdir)
}

pub const PLACES: &'_ str = "
gazetteer:
  places:
    - { name: Istanbul, aliases: [Constantinople], lon: 28.9784, lat: 41.0082 }
    - { name: Reykjavik, lon: -21.9426, lat: 64.1466 }
    - { name: Quito, lon: -78.4678, lat: -0.1807 }
    - { name: Broken, lon: 10.0, lat: 100.0 }
";
