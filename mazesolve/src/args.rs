use std::path::PathBuf;

use clap::Parser;
use maze_search::StrategyKind;

#[derive(Parser, Debug)]
#[command(name = "mazesolve")]
#[command(about = "Find a path from A to B through a text maze")]
pub struct Args {
    /// Maze file: `#` wall, `w` water, `A` start, `B` goal, space free
    #[arg(short, long, value_name = "PATH", default_value = "maze.txt")]
    pub file: PathBuf,

    /// Search strategy: dfs, bfs, gbfs, dijkstra or astar
    #[arg(short, long, value_name = "TYPE", default_value = "dfs")]
    pub search: StrategyKind,

    /// Seed for the neighbor shuffle (random when omitted)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Debug logging, including the frontier before every removal
    #[arg(short, long)]
    pub debug: bool,

    /// Write one image per expansion into <OUTPUT_DIR>/frames and assemble
    /// them into <OUTPUT_DIR>/animation.png
    #[arg(short, long)]
    pub animate: bool,

    /// Directory receiving solution.png and animation frames
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Print the solved maze to the terminal
    #[arg(short, long)]
    pub print: bool,

    /// Disable colored terminal output
    #[arg(long)]
    pub no_color: bool,

    /// Leave coordinates and search keys out of the image tiles
    #[arg(long)]
    pub no_labels: bool,

    /// Tile size of the written images in pixels
    #[arg(long, value_name = "PIXELS", default_value = "60")]
    pub cell_size: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let a = Args::try_parse_from(["mazesolve"]).unwrap();
        assert_eq!(a.file, PathBuf::from("maze.txt"));
        assert_eq!(a.search, StrategyKind::Dfs);
        assert_eq!(a.seed, None);
        assert_eq!(a.output_dir, PathBuf::from("."));
        assert_eq!(a.cell_size, 60);
        assert!(!a.debug && !a.animate && !a.print && !a.no_color && !a.no_labels);
    }

    #[test]
    fn strategy_and_seed() {
        let a = Args::try_parse_from([
            "mazesolve", "--search", "astar", "--seed", "42", "-f", "m.txt", "--animate",
        ])
        .unwrap();
        assert_eq!(a.search, StrategyKind::Astar);
        assert_eq!(a.seed, Some(42));
        assert_eq!(a.file, PathBuf::from("m.txt"));
        assert!(a.animate);
    }

    #[test]
    fn unknown_strategy_is_rejected() {
        assert!(Args::try_parse_from(["mazesolve", "--search", "best"]).is_err());
    }

    #[test]
    fn command_is_well_formed() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
