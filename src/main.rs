//! Marble Maze generator entry point
//!
//! Native builds expose a small CLI that prints the layout selected for a
//! level as JSON. The web build is driven through `platform::select_layout_json`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use marble_maze::maze::{FieldBounds, LevelSelector, OccupancyGrid};
    use marble_maze::tuning::MazeTuning;

    /// Print the validated maze layout for a level
    #[derive(Debug, Parser)]
    #[command(name = "marble-maze", version)]
    struct Args {
        /// Level number (1-based)
        level: u32,
        /// Play-field width
        #[arg(long, default_value_t = 390.0)]
        width: f32,
        /// Play-field height
        #[arg(long, default_value_t = 844.0)]
        height: f32,
        /// RNG seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// JSON file with tuning overrides
        #[arg(long)]
        tuning: Option<PathBuf>,
        /// Also print the occupancy grid to stderr
        #[arg(long)]
        grid: bool,
    }

    pub fn run() -> anyhow::Result<()> {
        env_logger::init();
        let args = Args::parse();

        let tuning = match &args.tuning {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading tuning file {}", path.display()))?;
                MazeTuning::from_json(&json).context("parsing tuning overrides")?
            }
            None => MazeTuning::default(),
        };

        let bounds = FieldBounds::new(args.width, args.height)?;
        let seed = args.seed.unwrap_or_else(rand::random);
        log::info!("Selecting level {} on {}x{} (seed {})", args.level, args.width, args.height, seed);

        let mut rng = Pcg32::seed_from_u64(seed);
        let layout = LevelSelector::new(tuning).select(args.level, bounds, &mut rng);

        if args.grid {
            let grid = OccupancyGrid::rasterize(&layout.walls, bounds);
            eprint!("{}", grid.render_with_points(Some(layout.start), &layout.goals));
        }

        println!("{}", layout.to_json_pretty()?);
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
