use wellness_core::config::Config;

fn main() {
    // Example: honours WELLNESS_DEFAULT_* overrides
    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("config error: {}", e);
            return;
        }
    };
    let result = cfg.initial.compute();
    println!(
        "Score {} ({}) for {}: {}",
        result.final_score, result.status, cfg.initial.category, result.recommendation
    );
}
