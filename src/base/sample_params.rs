use super::ParamOgden;

/// Holds samples of material parameters
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for a rubber-like, nearly incompressible, Ogden material
    ///
    /// ```text
    /// c1 = 1, m1 = 12, k = 1000
    /// ```
    pub fn param_ogden() -> ParamOgden {
        ParamOgden {
            c1: 1.0,
            m1: 12.0,
            k: 1000.0,
        }
    }

    /// Returns sample parameters for a soft compressible Ogden material with a negative exponent
    pub fn param_ogden_soft() -> ParamOgden {
        ParamOgden {
            c1: 0.5,
            m1: -2.0,
            k: 50.0,
        }
    }

    /// Returns sample parameters whose equilibrium Jacobian leaves the default [0.9, 1.1] bracket
    pub fn param_ogden_very_compressible() -> ParamOgden {
        ParamOgden {
            c1: 1.0,
            m1: 12.0,
            k: 0.05,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SampleParams;

    #[test]
    fn sample_params_are_valid() {
        SampleParams::param_ogden().validate().unwrap();
        SampleParams::param_ogden_soft().validate().unwrap();
        SampleParams::param_ogden_very_compressible().validate().unwrap();
    }
}
