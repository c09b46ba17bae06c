use anyhow::Result;
use clap::Parser;
use hexlife_lib::app::App;
use hexlife_lib::model::config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Grid side length (overrides [world].size)
    #[arg(short, long)]
    size: Option<usize>,

    /// Number of generations to render (overrides [world].generations)
    #[arg(short, long)]
    generations: Option<u64>,

    /// Frame file name prefix (overrides [render].prefix)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Directory frames are written to (overrides [render].output_dir)
    #[arg(short, long)]
    output_dir: Option<String>,

    /// RNG seed for reproducible runs (overrides [world].seed)
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON run summary to stdout when done
    #[arg(long)]
    summary: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(size) = self.size {
            config.world.size = size;
        }
        if let Some(generations) = self.generations {
            config.world.generations = generations;
        }
        if let Some(prefix) = &self.prefix {
            config.render.prefix = prefix.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.render.output_dir = dir.clone();
        }
        if self.seed.is_some() {
            config.world.seed = self.seed;
        }
    }
}

fn main() -> Result<()> {
    hexlife_lib::model::metrics::init_logging();
    let args = Args::parse();

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);
    config.validate()?;

    let mut app = App::new(config)?;
    let summary = app.run()?;

    tracing::info!(
        generations = summary.generations,
        final_live_cells = summary.final_live_cells,
        "Frames written to {}",
        app.sink.output_dir().display()
    );
    if args.summary {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }

    Ok(())
}
