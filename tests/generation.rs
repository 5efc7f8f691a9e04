//! End-to-end spanning tree generation behavior

use gridloom::{GenerationError, GridGraphGenerator, Result};
use ndarray::Array2;

fn marked_edge_count(generator: &GridGraphGenerator) -> usize {
    let grid = generator.grid();
    grid.edge_coordinates()
        .into_iter()
        .filter(|&slot| grid.is_marked(slot))
        .count()
}

fn reachable_count(adjacency: &Array2<bool>) -> usize {
    let size = adjacency.nrows();
    let mut seen = vec![false; size];
    let mut stack = vec![0_usize];
    if let Some(first) = seen.get_mut(0) {
        *first = true;
    }

    while let Some(node) = stack.pop() {
        for neighbor in 0..size {
            if adjacency.get([node, neighbor]).copied().unwrap_or(false)
                && seen.get(neighbor).copied() == Some(false)
            {
                if let Some(flag) = seen.get_mut(neighbor) {
                    *flag = true;
                }
                stack.push(neighbor);
            }
        }
    }

    seen.iter().filter(|&&visited| visited).count()
}

#[test]
fn test_tree_spans_every_cell() -> Result<()> {
    for (height, width, seed) in [(2, 2, 1), (3, 5, 7), (6, 4, 1234), (5, 5, 42)] {
        let mut generator = GridGraphGenerator::seeded(height, width, 0, seed)?;
        generator.generate_grid()?;

        let cell_count = height * width;
        assert_eq!(generator.visited_cells(), cell_count);
        assert_eq!(generator.unvisited_cells(), 0);
        assert_eq!(marked_edge_count(&generator), cell_count - 1);
    }

    Ok(())
}

#[test]
fn test_generated_graph_is_connected() -> Result<()> {
    let mut generator = GridGraphGenerator::seeded(5, 6, 0, 99)?;
    let adjacency = generator.generate_adjacency()?;

    assert_eq!(reachable_count(&adjacency), 30);

    Ok(())
}

#[test]
fn test_extra_edges_add_exact_count() -> Result<()> {
    for (height, width, extra, seed) in [(3, 3, 2, 5), (4, 4, 4, 8), (5, 5, 16, 3)] {
        let mut generator = GridGraphGenerator::seeded(height, width, extra, seed)?;
        let adjacency = generator.generate_adjacency()?;

        assert_eq!(
            marked_edge_count(&generator),
            height * width - 1 + extra,
        );
        assert_eq!(reachable_count(&adjacency), height * width);
    }

    Ok(())
}

#[test]
fn test_regeneration_does_not_accumulate() -> Result<()> {
    let mut generator = GridGraphGenerator::seeded(4, 5, 3, 77)?;

    generator.generate_grid()?;
    assert_eq!(marked_edge_count(&generator), 22);

    generator.generate_grid()?;
    assert_eq!(marked_edge_count(&generator), 22);
    assert_eq!(generator.visited_cells(), 20);
    assert_eq!(generator.unvisited_cells(), 0);

    Ok(())
}

#[test]
fn test_single_cell_grid() -> Result<()> {
    let mut generator = GridGraphGenerator::seeded(1, 1, 0, 5)?;
    generator.generate_grid()?;

    assert_eq!(generator.visited_cells(), 1);
    assert_eq!(marked_edge_count(&generator), 0);
    assert_eq!(generator.render(), "*\n");

    Ok(())
}

#[test]
fn test_line_grids_use_every_slot() -> Result<()> {
    // A line admits exactly one spanning tree
    let mut row_line = GridGraphGenerator::seeded(1, 12, 0, 21)?;
    row_line.generate_grid()?;
    assert_eq!(marked_edge_count(&row_line), 11);
    let grid = row_line.grid();
    assert!(
        grid.edge_coordinates()
            .into_iter()
            .all(|slot| grid.is_marked(slot))
    );

    let mut column_line = GridGraphGenerator::seeded(9, 1, 0, 22)?;
    column_line.generate_grid()?;
    assert_eq!(marked_edge_count(&column_line), 8);

    // No slot stays absent on a line, so no loop fits
    assert_eq!(
        GridGraphGenerator::seeded(1, 12, 1, 21).err(),
        Some(GenerationError::InvalidLoopCount {
            requested: 1,
            available: 0
        })
    );

    Ok(())
}

#[test]
fn test_two_by_two_loop_closes_the_cycle() -> Result<()> {
    // Four cells, four slots, one absent slot: injecting it is forced
    for seed in [1, 9, 512] {
        let mut generator = GridGraphGenerator::seeded(2, 2, 1, seed)?;
        let adjacency = generator.generate_adjacency()?;

        let expected = [
            (0, 1, true),
            (0, 2, true),
            (1, 3, true),
            (2, 3, true),
            (0, 3, false),
            (1, 2, false),
        ];
        for (row, col, connected) in expected {
            assert_eq!(adjacency.get([row, col]).copied(), Some(connected));
        }
        assert_eq!(marked_edge_count(&generator), 4);
    }

    Ok(())
}

#[test]
fn test_saturated_grid_marks_every_slot() -> Result<()> {
    let mut generator = GridGraphGenerator::seeded(3, 3, 4, 64)?;
    generator.generate_grid()?;

    let grid = generator.grid();
    assert!(
        grid.edge_coordinates()
            .into_iter()
            .all(|slot| grid.is_marked(slot))
    );

    Ok(())
}

#[test]
fn test_same_seed_reproduces_same_tree() -> Result<()> {
    let mut first = GridGraphGenerator::seeded(6, 6, 3, 2718)?;
    let mut second = GridGraphGenerator::seeded(6, 6, 3, 2718)?;

    first.generate_grid()?;
    second.generate_grid()?;
    assert_eq!(first.render(), second.render());

    let first_matrix = first.generate_adjacency()?;
    let second_matrix = second.generate_adjacency()?;
    assert_eq!(first_matrix, second_matrix);

    Ok(())
}

#[test]
fn test_different_seeds_diverge() -> Result<()> {
    let mut first = GridGraphGenerator::seeded(6, 6, 0, 1)?;
    let mut second = GridGraphGenerator::seeded(6, 6, 0, 2)?;

    first.generate_grid()?;
    second.generate_grid()?;

    assert_ne!(first.render(), second.render());

    Ok(())
}

#[test]
fn test_render_glyph_inventory() -> Result<()> {
    let mut generator = GridGraphGenerator::seeded(3, 4, 0, 1001)?;
    generator.generate_grid()?;
    let rendering = generator.render();

    let lines: Vec<&str> = rendering.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines.iter().all(|line| line.chars().count() == 7));

    assert_eq!(rendering.matches('*').count(), 12);
    assert_eq!(
        rendering.matches('–').count() + rendering.matches('|').count(),
        11
    );

    Ok(())
}

#[test]
fn test_invalid_requests_are_rejected() {
    assert_eq!(
        GridGraphGenerator::seeded(0, 4, 0, 1).err(),
        Some(GenerationError::InvalidDimension {
            axis: "height",
            value: 0
        })
    );
    assert_eq!(
        GridGraphGenerator::seeded(4, 0, 0, 1).err(),
        Some(GenerationError::InvalidDimension {
            axis: "width",
            value: 0
        })
    );
    assert_eq!(
        GridGraphGenerator::seeded(2, 2, 2, 1).err(),
        Some(GenerationError::InvalidLoopCount {
            requested: 2,
            available: 1
        })
    );
}
