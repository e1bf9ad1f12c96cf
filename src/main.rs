//! Shows `mentions.txt` from the working directory as a graph.

use mention_graph::{Config, init_logging, run};

fn main() -> anyhow::Result<()> {
	init_logging();
	run(&Config::default())?;
	Ok(())
}
