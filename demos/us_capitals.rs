//! Find the state capital closest to a city.
//!
//! Run with `RUST_LOG=debug` to see tree construction details.

use kd_nearest::kdtree::{KDTreeBuilder, KDTreeIndex};

/// US state capitals as (name, latitude, longitude).
const CAPITALS: &[(&str, f64, f64)] = &[
    ("Montgomery", 32.377716, -86.300568),
    ("Juneau", 58.301598, -134.420212),
    ("Phoenix", 33.448143, -112.096962),
    ("Little Rock", 34.746613, -92.288986),
    ("Sacramento", 38.576668, -121.493629),
    ("Denver", 39.739227, -104.984856),
    ("Hartford", 41.764046, -72.682198),
    ("Dover", 39.157307, -75.519722),
    ("Honolulu", 21.307442, -157.857376),
    ("Tallahassee", 30.438118, -84.281296),
    ("Atlanta", 33.749027, -84.388229),
    ("Boise", 43.617775, -116.199722),
    ("Springfield", 39.798363, -89.654961),
    ("Indianapolis", 39.768623, -86.162643),
    ("Des Moines", 41.591087, -93.603729),
    ("Topeka", 39.048191, -95.677956),
    ("Frankfort", 38.186722, -84.875374),
    ("Baton Rouge", 30.457069, -91.187393),
    ("Augusta", 44.307167, -69.781693),
    ("Annapolis", 38.978764, -76.490936),
    ("Boston", 42.358162, -71.063698),
    ("Lansing", 42.733635, -84.555328),
    ("St. Paul", 44.955097, -93.102211),
    ("Jackson", 32.303848, -90.182106),
    ("Jefferson City", 38.579201, -92.172935),
    ("Helena", 46.585709, -112.018417),
    ("Lincoln", 40.808075, -96.699654),
    ("Carson City", 39.163914, -119.766121),
    ("Concord", 43.206898, -71.537994),
    ("Trenton", 40.220596, -74.769913),
    ("Santa Fe", 35.68224, -105.939728),
    ("Raleigh", 35.78043, -78.639099),
    ("Bismarck", 46.82085, -100.783318),
    ("Albany", 42.652843, -73.757874),
    ("Columbus", 39.961346, -82.999069),
    ("Oklahoma City", 35.492207, -97.503342),
    ("Salem", 44.938461, -123.030403),
    ("Harrisburg", 40.264378, -76.883598),
    ("Providence", 41.830914, -71.414963),
    ("Columbia", 34.000343, -81.033211),
    ("Pierre", 44.367031, -100.346405),
    ("Nashville", 36.16581, -86.784241),
    ("Austin", 30.27467, -97.740349),
    ("Salt Lake City", 40.777477, -111.888237),
    ("Montpelier", 44.262436, -72.580536),
    ("Richmond", 37.538857, -77.43364),
    ("Olympia", 47.035805, -122.905014),
    ("Charleston", 38.336246, -81.612328),
    ("Madison", 43.074684, -89.384445),
    ("Cheyenne", 41.140259, -104.820236),
];

fn main() -> kd_nearest::Result<()> {
    env_logger::init();

    let mut builder = KDTreeBuilder::<f64>::new();
    for (_, lat, lon) in CAPITALS {
        builder.add((*lat, *lon))?;
    }
    let tree = builder.finish();
    println!(
        "Indexed {} capitals in a tree of depth {}",
        tree.num_items(),
        tree.depth()
    );

    let fort_collins = [40.5566532, -105.1026712];
    match tree.nearest_neighbor(&fort_collins)? {
        Some(nearest) => {
            let (name, lat, lon) = CAPITALS[nearest.id];
            println!(
                "Closest capital to Fort Collins, CO: {} ({}, {}), squared distance {:.6}",
                name, lat, lon, nearest.distance_sq
            );
        }
        None => println!("No capitals indexed"),
    }

    Ok(())
}
