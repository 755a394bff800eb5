use randomizer::{Randomizer, RandomizerError};

fn main() -> Result<(), RandomizerError> {
    let _ = env_logger::Builder::from_default_env().try_init();

    let mut rng = Randomizer::from_clock();
    log::info!("number-stream: seeded from the system clock, state {}", rng.state());

    for _ in 0..10 {
        println!("{}", rng.next_int(100)?);
    }
    Ok(())
}
