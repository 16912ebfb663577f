//! Generate a gradient between two colors and install it in a store.
//!
//! Run with: cargo run --example gradient

use swatchbook::{PaletteStore, Rgb, smooth_gradient};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let start = Rgb::from_hex("#FF4000").expect("valid hex");
    let end = Rgb::from_hex("#0040FF").expect("valid hex");

    let mut store = PaletteStore::new();
    for color in smooth_gradient(start, end, 8) {
        store.add_color(color);
    }

    for entry in store.colors() {
        println!("{}", entry);
    }

    store.undo();
    println!("after undo: {} colors", store.len());
    store.redo();
    println!("after redo: {} colors", store.len());
}
