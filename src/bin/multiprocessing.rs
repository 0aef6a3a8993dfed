use monte_carlo_pi::MonteCarloPi;
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let total_points: usize = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(1_000_000);
    let num_processes: usize = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(4);

    let monte_carlo = MonteCarloPi::new(total_points, num_processes).expect("Invalid parameters");

    let start = Instant::now();
    let pi_estimate = monte_carlo.estimate().expect("Estimation failed");
    let elapsed = start.elapsed();

    println!("Estimated π (Multiprocessing): {}", pi_estimate);
    println!("Execution Time: {:.4} seconds", elapsed.as_secs_f64());
}
