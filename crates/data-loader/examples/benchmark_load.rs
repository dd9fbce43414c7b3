use data_loader::{City, TripTable};
use std::path::Path;
use std::time::Instant;

fn main() {
    let data_dir = Path::new("data");

    for city in City::ALL {
        println!("Loading {} trips...", city);

        let start = Instant::now();
        let table = TripTable::load_city(data_dir, city)
            .expect("Failed to load dataset");
        let elapsed = start.elapsed();

        println!("  Time taken: {:?}", elapsed);
        println!("  Trips: {}", table.len());
        println!("  Gender column: {}", table.has_gender());
        println!("  Birth year column: {}", table.has_birth_year());
        println!("  Performance: {:.0} trips/second\n",
                 table.len() as f64 / elapsed.as_secs_f64());
    }
}
