use geohash_rs::{Direction, GeohashCell, GeohashError, Precision, neighbors};

fn main() -> Result<(), GeohashError> {
    let lon = 10.40744;
    let lat = 57.64911;

    let cell = GeohashCell::from_coord(&(lon, lat), Precision::High)?;

    println!("Geohash: {}", cell.hash);
    println!("Center: ({}, {})", cell.latitude(), cell.longitude());
    println!(
        "Bounds: ({}, {}) - ({}, {})",
        cell.bounds.lower.latitude,
        cell.bounds.lower.longitude,
        cell.bounds.upper.latitude,
        cell.bounds.upper.longitude
    );

    for (direction, hash) in Direction::ALL.iter().zip(neighbors(&cell.hash, false)?) {
        println!("{:>2}: {}", direction, hash);
    }

    let polygon = cell.to_polygon();
    println!("Polygon: {:?}", polygon);

    Ok(())
}
