use std::error::Error;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use tribounce::{Animation, AnimationConfig, RasterStrategy};

// Uso: bouncing_triangles [estrategia] [directorio] [semilla] [formato]
fn main() -> Result<(), Box<dyn Error>> {
    tribounce::init();

    let args: Vec<String> = std::env::args().collect();
    let strategy: RasterStrategy = match args.get(1) {
        Some(name) => name.parse()?,
        None => RasterStrategy::default(),
    };
    let output_dir = PathBuf::from(args.get(2).map(String::as_str).unwrap_or("frames"));
    let seed = match args.get(3) {
        Some(seed) => seed.parse()?,
        None => tribounce::config::DEFAULT_SEED,
    };
    let mut config = AnimationConfig::default().with_strategy(strategy).with_seed(seed);
    if let Some(format) = args.get(4) {
        config = config.with_format(format.parse()?);
    }

    let stop = Arc::new(AtomicBool::new(false));
    let handler_stop = Arc::clone(&stop);
    ctrlc::set_handler(move || {
        println!("Deteniendo tras el fotograma actual...");
        handler_stop.store(true, Ordering::Relaxed);
    })?;

    println!("Creando fotogramas de triángulos ({}) en {}", strategy, output_dir.display());
    let mut animation = Animation::new(config)?;
    let start = Instant::now();
    let written = animation.run(&output_dir, &stop)?;
    println!("{} fotogramas en {:.2?}", written.len(), start.elapsed());

    Ok(())
}
