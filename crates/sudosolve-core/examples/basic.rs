//! Basic example of using the solver.

use sudosolve_core::{Grid, Solver, SolverConfig};

fn main() {
    let puzzle =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let grid = Grid::from_string(puzzle).expect("valid puzzle string");

    println!("Puzzle ({} given cells):", grid.filled_count());
    println!("{}", grid);

    let solver = Solver::new();
    let result = solver.solve(&grid);

    match result.count() {
        0 => println!("There are no possible solutions."),
        1 => {
            println!("There is one unique solution:");
            println!("{}", result.first_solution().unwrap());
        }
        n => println!("There are at least {} possible solutions", n),
    }

    // Exact counting: remove the cap to enumerate every solution.
    let exact = Solver::with_config(SolverConfig {
        solution_limit: usize::MAX,
    });
    println!(
        "Exact solution count: {}",
        exact.count_solutions(&grid, usize::MAX)
    );
}
