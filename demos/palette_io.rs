//! Save a palette to disk and load it back.
//!
//! Run with: cargo run --example palette_io

use swatchbook::{PaletteStore, Rgb, io};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut store = PaletteStore::new();
    store.add_color(Rgb::new(255, 99, 71));
    store.add_color(Rgb::new(70, 130, 180));
    store.add_color(Rgb::new(60, 179, 113));

    let path = std::env::temp_dir().join("swatchbook-demo.gpl");

    pollster::block_on(io::save_palette(&path, "Demo Palette", store.colors()))
        .expect("save failed");
    println!("saved {} colors to {:?}", store.len(), path);

    let entries = pollster::block_on(io::load_palette(&path)).expect("load failed");
    store.load_palette(entries);

    for entry in store.colors() {
        println!("{}", entry);
    }
}
