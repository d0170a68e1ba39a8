//! Prints the size of the locally minimal cover for a range of board sizes.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example cover_table
//! ```
//!
//! Choose the range of rows and columns (both inclusive, default 1 to 10):
//!
//! ```sh
//! cargo run --release --example cover_table -- --min 3 --max 16
//! ```
//!
//! Print the grid of every board as well:
//!
//! ```sh
//! cargo run --release --example cover_table -- --max 6 --show-grid
//! ```

use std::process;

use clap::Parser;
use knightcover_core::BoardSize;
use knightcover_solver::{cover, engine};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Smallest row and column count.
    #[arg(long, value_name = "N", default_value_t = 1)]
    min: usize,

    /// Largest row and column count.
    #[arg(long, value_name = "N", default_value_t = 10)]
    max: usize,

    /// Print each minimised grid below the table.
    #[arg(long)]
    show_grid: bool,
}

fn main() {
    let args = Args::parse();
    if args.min == 0 || args.min > args.max {
        eprintln!("--min must be at least 1 and not greater than --max.");
        process::exit(1);
    }

    let dims: Vec<usize> = (args.min..=args.max).collect();
    let results = dims
        .iter()
        .flat_map(|&rows| dims.iter().map(move |&cols| (rows, cols)))
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|(rows, cols)| {
            let size = BoardSize::new(rows, cols).unwrap();
            let (grid, stats) = engine::minimized(size);
            assert!(cover::is_locally_minimal(&grid));
            (grid, stats)
        })
        .collect::<Vec<_>>();

    print!("rows\\cols");
    for cols in &dims {
        print!("{cols:>5}");
    }
    println!();
    for (row_results, rows) in results.chunks(dims.len()).zip(&dims) {
        print!("{rows:>9}");
        for (grid, _) in row_results {
            print!("{:>5}", grid.occupied_count());
        }
        println!();
    }

    if args.show_grid {
        for (grid, stats) in &results {
            println!();
            println!(
                "{} ({} knights, {} passes):",
                grid.size(),
                grid.occupied_count(),
                stats.passes()
            );
            print!("{grid}");
        }
    }
}
