// ui.rs - Terminal frames for `run`: the grid plus population statistics

use conway::Snapshot;

/// One frame: the snapshot in file format, then a statistics line.
pub fn frame(snapshot: &Snapshot) -> String {
    format!("{snapshot}\n{}\n", statistics(snapshot))
}

pub fn statistics(snapshot: &Snapshot) -> String {
    let total = snapshot.rows() * snapshot.cols();
    let live_cells = snapshot.live_count();
    let population = live_cells as f64 / total as f64 * 100.0;
    format!(
        "Live cells: {}  Dead cells: {}  Population: {:.1}%",
        live_cells,
        total - live_cells,
        population
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_shows_grid_and_statistics() {
        let snapshot = conway::parse("Generation 3:\n2 4\n*...\n.**.").unwrap();
        assert_eq!(
            frame(&snapshot),
            "Generation 3:\n2 4\n*...\n.**.\nLive cells: 3  Dead cells: 5  Population: 37.5%\n"
        );
    }
}
