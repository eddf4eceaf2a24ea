use mazecarve::{
    config::{HEIGHT, WIDTH},
    generators::get_rng,
    maze::{Maze, NodeId},
    print_solution,
    renderer::render,
};
use rand::RngCore;

/// Produces nothing but zeros, so every direction shuffle comes out as south, west, east, north.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0);
    }
}

const GOLDEN_MAZE: &str = concat!(
    "||||||||||\n",
    "||  ||  ||\n",
    "||  ||  ||\n",
    "||      ||\n",
    "||||||||||\n",
);

const GOLDEN_SOLVED: &str = concat!(
    "Solved Maze:\n",
    "||||||||||\n",
    "||* ||  ||\n",
    "||  ||  ||\n",
    "||*   * ||\n",
    "||||||||||\n",
);

#[test]
fn test_golden_5x5() {
    let maze = Maze::generate(5, 5, &mut ZeroRng);
    assert_eq!(render(maze.grid(), None), GOLDEN_MAZE);
    assert_eq!(maze.graph().edge_count(), 3);

    let mut out = Vec::new();
    let solved = print_solution(&maze, &mut out, false).unwrap();
    assert!(solved);
    assert_eq!(String::from_utf8(out).unwrap(), GOLDEN_SOLVED);
}

/// Number of rooms reachable from `start` by following graph edges.
fn reachable_rooms(maze: &Maze, start: NodeId) -> usize {
    let graph = maze.graph();
    let mut seen = vec![false; graph.node_count()];
    let mut queue = std::collections::VecDeque::from([start]);
    seen[start.index()] = true;
    let mut count = 0;
    while let Some(id) = queue.pop_front() {
        count += 1;
        for n in graph.neighbors(id) {
            if !seen[n.index()] {
                seen[n.index()] = true;
                queue.push_back(n);
            }
        }
    }
    count
}

#[test]
fn test_every_room_reachable() {
    for (width, height) in [(5, 5), (7, 11), (13, 5), (WIDTH, HEIGHT)] {
        for seed in 0..25 {
            let maze = Maze::generate(width, height, &mut get_rng(Some(seed)));
            assert_eq!(reachable_rooms(&maze, maze.start()), maze.room_count());
            assert_eq!(maze.graph().edge_count(), maze.room_count() - 1);
        }
    }
}

#[test]
fn test_solution_always_found() {
    for seed in 0..50 {
        let maze = Maze::generate(WIDTH, HEIGHT, &mut get_rng(Some(seed)));
        let outcome = maze.solve();
        assert!(outcome.found, "seed {seed} produced an unsolvable maze");

        let path = outcome.path().unwrap();
        assert_eq!(path.start(), maze.start());
        assert_eq!(path.goal(), maze.goal());
        assert!(!path.is_empty());
        assert_eq!(path.cell_span() % 2, 1);

        // Consecutive rooms are joined by an opened passage
        let grid = maze.grid();
        for pair in path.nodes().windows(2) {
            let (a, b) = (grid.coord_of(pair[0]), grid.coord_of(pair[1]));
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 2);
            assert!(grid.is_open(((a.0 + b.0) / 2, (a.1 + b.1) / 2)));
        }
    }
}

#[test]
fn test_path_is_unique() {
    // In a spanning tree the path to the goal cannot depend on exploration order,
    // so it must match the tree path found by walking up from the goal with BFS parents.
    for seed in 0..10 {
        let maze = Maze::generate(15, 15, &mut get_rng(Some(seed)));
        let graph = maze.graph();
        let mut parent = vec![None; graph.node_count()];
        let mut seen = vec![false; graph.node_count()];
        let mut queue = std::collections::VecDeque::from([maze.start()]);
        seen[maze.start().index()] = true;
        while let Some(id) = queue.pop_front() {
            for n in graph.neighbors(id) {
                if !seen[n.index()] {
                    seen[n.index()] = true;
                    parent[n.index()] = Some(id);
                    queue.push_back(n);
                }
            }
        }
        let mut expected = vec![maze.goal()];
        while let Some(p) = parent[expected[expected.len() - 1].index()] {
            expected.push(p);
        }

        assert_eq!(maze.solve().path().unwrap().nodes(), expected.as_slice());
    }
}

#[test]
fn test_same_seed_same_maze() {
    let a = Maze::generate(WIDTH, HEIGHT, &mut get_rng(Some(2024)));
    let b = Maze::generate(WIDTH, HEIGHT, &mut get_rng(Some(2024)));
    assert_eq!(a, b);
    assert_eq!(render(a.grid(), None), render(b.grid(), None));
}

#[test]
fn test_minimal_grid() {
    let maze = Maze::generate(3, 3, &mut get_rng(Some(1)));
    assert_eq!(maze.room_count(), 1);
    assert_eq!(maze.graph().edge_count(), 0);
    assert_eq!(maze.start(), maze.goal());

    let outcome = maze.solve();
    assert!(outcome.found);
    let path = outcome.path().unwrap();
    assert_eq!(path.edge_count(), 0);
    assert_eq!(path.nodes(), [maze.start()]);
}
