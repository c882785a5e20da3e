use ogden::prelude::*;
use russell_lab::approx_eq;

// TEST GOAL
//
// This test verifies the constrained (incompressible) formulation under uniaxial loading
//
// CONFIGURATION AND PARAMETERS
//
// c1 = 1, m1 = 12, k = 1000
// λ3 from 1.0 to 1.3 with 31 samples
//
// The lateral stresses vanish identically, the Jacobian is 1, and
//
// S3 = (c1/m1) (λ3^m1 - λ3^(-m1/2))

#[test]
fn test_ogden_constrained() -> Result<(), StrError> {
    // parameters and configuration
    let param = SampleParams::param_ogden();
    let mut config = Config::new();
    config.set_applied_stretch(1.3)?.set_n_data_points(31)?;

    // run
    let sweep = UniaxialSweep::new(&param, &config)?;
    let results = sweep.run(Formulation::Constrained)?;
    assert_eq!(results.states.len(), 31);
    assert_eq!(results.failures.len(), 0);
    assert_eq!(results.strategy, None);

    // check closed form
    for state in &results.states {
        let l = state.lambda3;
        let correct = (1.0 / 12.0) * (f64::powf(l, 12.0) - f64::powf(l, -6.0));
        assert_eq!(state.s1, 0.0);
        assert_eq!(state.s2, 0.0);
        assert_eq!(state.jacobian, 1.0);
        approx_eq(state.s3, correct, 1e-14);
        approx_eq(state.lambda1, 1.0 / f64::sqrt(l), 1e-15);
    }

    // check monotonicity
    let s3 = results.s3();
    for i in 1..s3.len() {
        assert!(s3[i] > s3[i - 1]);
    }

    // check the last sample
    let last = results.states.last().unwrap();
    approx_eq(last.lambda3, 1.3, 1e-15);
    approx_eq(last.s3, 1.9242424092873336, 1e-13);
    Ok(())
}

#[test]
fn test_ogden_constrained_compression() -> Result<(), StrError> {
    // the sweep may also go below 1.0 (compression)
    let param = SampleParams::param_ogden_soft();
    let mut config = Config::new();
    config.set_applied_stretch(0.6)?.set_n_data_points(9)?;
    let sweep = UniaxialSweep::new(&param, &config)?;
    let results = sweep.run(Formulation::Constrained)?;
    assert_eq!(results.states.len(), 9);
    approx_eq(results.states[0].s3, 0.0, 1e-15);
    for state in &results.states[1..] {
        assert!(state.s3 < 0.0);
    }
    Ok(())
}
