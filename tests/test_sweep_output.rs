use ogden::prelude::*;
use russell_lab::approx_eq;
use std::path::Path;

const SAVE_FIGURE: bool = false;

// TEST GOAL
//
// This test runs all formulations, writes the results to JSON files,
// reads them back, and (optionally) plots the curves

#[test]
fn test_sweep_output() -> Result<(), StrError> {
    let param = SampleParams::param_ogden();
    let mut config = Config::new();
    config.set_n_data_points(21)?.set_parallel(true)?;
    let sweep = UniaxialSweep::new(&param, &config)?;
    let all = sweep.run_all()?;
    assert_eq!(all.len(), 3);

    let mut plotter = Plotter::new();
    for results in &all {
        assert_eq!(results.states.len(), 21);
        let path = Path::new(DEFAULT_TEST_DIR).join(format!("test_sweep_output_{}.json", results.formulation.key()));
        results.write(&path)?;
        let read = SweepResults::from(&path)?;
        assert_eq!(read.formulation, results.formulation);
        assert_eq!(read.states, results.states);
        plotter.draw(results);
    }

    // the Jacobian stays close to 1 for a nearly incompressible material
    let (j_min, j_max) = SweepResults::min_max(&all[2].jacobians()).unwrap();
    approx_eq(j_min, 1.0, 1e-12);
    assert!(j_max > 1.0 && j_max < 1.01);

    if SAVE_FIGURE {
        let path = Path::new(DEFAULT_TEST_DIR).join("test_sweep_output.svg");
        plotter.save(&path)?;
    }
    Ok(())
}
