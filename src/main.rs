//! Seeded Layout entry point
//!
//! Native CLI for generating, saving and verifying layouts:
//!
//! ```text
//! seeded-layout generate <seed> [params.json]
//! seeded-layout save <seed> <out.json> [params.json]
//! seeded-layout verify <saved.json>
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use anyhow::{Context, Result, bail};

    use seeded_layout::persistence::SavedLayout;
    use seeded_layout::{LayoutParams, Seed, generate};

    const USAGE: &str = "usage:
  seeded-layout generate <seed> [params.json]
  seeded-layout save <seed> <out.json> [params.json]
  seeded-layout verify <saved.json>";

    fn parse_seed(arg: Option<&String>) -> Result<Seed> {
        let arg = arg.context("missing <seed>")?;
        arg.parse::<Seed>()
            .with_context(|| format!("invalid seed {arg:?}"))
    }

    fn load_params(arg: Option<&String>) -> Result<LayoutParams> {
        match arg {
            Some(path) => LayoutParams::load(path)
                .with_context(|| format!("failed to load parameters from {path}")),
            None => Ok(LayoutParams::default()),
        }
    }

    /// Returns the process exit code
    pub fn run(args: &[String]) -> Result<i32> {
        let Some(command) = args.first() else {
            bail!("{USAGE}");
        };

        match command.as_str() {
            "generate" => {
                let seed = parse_seed(args.get(1))?;
                let params = load_params(args.get(2))?;
                let result = generate(seed, &params)?;
                println!("{}", serde_json::to_string_pretty(&result)?);
                Ok(0)
            }
            "save" => {
                let seed = parse_seed(args.get(1))?;
                let out = args.get(2).context("missing <out.json>")?;
                let params = load_params(args.get(3))?;
                let result = generate(seed, &params)?;
                SavedLayout::seal(&result, &params)?
                    .save(out)
                    .with_context(|| format!("failed to write {out}"))?;
                println!("{:08x}", result.fingerprint);
                Ok(0)
            }
            "verify" => {
                let path = args.get(1).context("missing <saved.json>")?;
                let saved = SavedLayout::load(path)
                    .with_context(|| format!("failed to load {path}"))?;
                if saved.verify()? {
                    println!("ok {:08x}", saved.fingerprint);
                    Ok(0)
                } else {
                    println!("mismatch (expected {:08x})", saved.fingerprint);
                    Ok(1)
                }
            }
            other => bail!("unknown command {other:?}\n{USAGE}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Seeded Layout (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let code = cli::run(&args)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
