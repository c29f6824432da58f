//! Benchmarks for legend layout
//!
//! Run with: cargo bench legend

use vkeys::keymap::{Keymap, VirtualKey};
use vkeys::legend::{Legend, LegendEntry, TextGrid};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn all_actions() -> Vec<LegendEntry> {
    VirtualKey::ALL.iter().copied().map(LegendEntry::from).collect()
}

#[divan::bench(args = [40, 80, 200])]
fn cells(bencher: divan::Bencher, width: usize) {
    let keymap = Keymap::with_defaults().unwrap();
    let entries = all_actions();
    let legend = Legend::new(&entries, width, 6);
    bencher.bench(|| legend.cells(&keymap, divan::black_box(1)));
}

#[divan::bench(args = [40, 80, 200])]
fn render_text_grid(bencher: divan::Bencher, width: usize) {
    let keymap = Keymap::with_defaults().unwrap();
    let entries = all_actions();
    let legend = Legend::new(&entries, width, 6);
    let mut grid = TextGrid::new(width);
    bencher.bench_local(|| legend.render(&keymap, 0, &mut grid).unwrap());
}
