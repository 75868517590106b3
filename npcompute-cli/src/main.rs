//! Writes DIMACS `.col` training graphs for the adder reduction.
//!
//! For bit-widths 1 through 4, builds `CONST(a, n) + CONST(b, n)` for
//! every `(a, b)` pair with `0 <= a, b < 2^n` and writes one DIMACS file
//! per pair under `./training_graphs/add_<n>bit_<a>_<b>.col`: 4 + 16 + 64
//! + 256 = 340 files in total.

use anyhow::{Context, Result};
use clap::Parser;
use npcompute::prelude::*;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::path::Path;

/// Generates DIMACS .col training graphs for the npcompute adder reductions.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli;

const OUTPUT_DIR: &str = "training_graphs";
const BIT_WIDTHS: [usize; 4] = [1, 2, 3, 4];

fn main() -> Result<()> {
    let _ = Cli::parse();
    let color = std::io::stdout().is_terminal();

    let mut total = 0usize;
    for &n in &BIT_WIDTHS {
        let count = generate_width(n).with_context(|| format!("generating {n}-bit adder graphs"))?;
        total += count;
        report(color, &format!("{n}-bit: wrote {count} graphs"));
    }
    report(color, &format!("done: wrote {total} graphs under {OUTPUT_DIR}/"));

    Ok(())
}

fn generate_width(n: usize) -> Result<usize> {
    let max = 1u64 << n;
    let mut count = 0usize;
    for a in 0..max {
        for b in 0..max {
            write_adder_graph(n, a, b)?;
            count += 1;
        }
    }
    Ok(count)
}

fn write_adder_graph(n: usize, a: u64, b: u64) -> Result<()> {
    let mut g = ThreeColorGraph::new();
    let ra = Const::new(&mut g, a, n).context("allocating left operand")?;
    let rb = Const::new(&mut g, b, n).context("allocating right operand")?;
    add(&mut g, &ra, &rb, None).context("building adder")?;

    let path = Path::new(OUTPUT_DIR).join(format!("add_{n}bit_{a}_{b}.col"));
    let name = format!("add_{n}bit_{a}_{b}");
    write_dimacs(&g, &path, Some(&name)).with_context(|| format!("writing {}", path.display()))
}

fn report(color: bool, line: &str) {
    if color {
        println!("{}", line.green());
    } else {
        println!("{line}");
    }
}
