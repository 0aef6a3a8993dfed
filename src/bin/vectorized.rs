use monte_carlo_pi::estimate_pi;
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let total_points: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);

    let start = Instant::now();
    let pi_estimate = estimate_pi(total_points).expect("Estimation failed");
    let elapsed = start.elapsed();

    println!("Estimated π (Vectorized): {}", pi_estimate);
    println!("Execution Time: {:.4} seconds", elapsed.as_secs_f64());
}
