use ogden::material::PrincipalStresses;
use ogden::prelude::*;

// TEST GOAL
//
// This test verifies that non-positive stretches are reported as domain errors
// (instead of NaN values) by the stress laws and by the sweep

#[test]
fn test_domain_errors() -> Result<(), StrError> {
    let model = ModelOgden::new(&SampleParams::param_ogden())?;
    let correct: Result<PrincipalStresses, SampleError> =
        Err(SampleError::Domain("stretch must be positive and finite"));
    for lambda3 in [0.0, -1.3] {
        assert_eq!(model.eval_constrained(lambda3), correct);
        assert_eq!(model.lateral_stress_unconstrained(lambda3, 1.0), correct.map(|_| 0.0));
        assert_eq!(model.lateral_stress_uncoupled(lambda3, 1.0), correct.map(|_| 0.0));
        assert_eq!(model.principal_unconstrained(lambda3, 1.0), correct);
        assert_eq!(model.principal_uncoupled(lambda3, 1.0), correct);
    }

    // sweep
    let config = Config::new();
    let sweep = UniaxialSweep::new(&SampleParams::param_ogden(), &config)?;
    for formulation in Formulation::all() {
        assert_eq!(
            sweep.solve_sample(formulation, 0.0).err(),
            Some(SampleError::Domain("stretch must be positive and finite"))
        );
    }

    // negative applied stretch
    let mut config = Config::new();
    assert_eq!(config.set_applied_stretch(-1.0).err(), Some("applied stretch must be > 0.0"));
    Ok(())
}
